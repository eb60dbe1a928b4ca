use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::database::{DatabaseManager, MySqlRepository};
use crate::server::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "company-api")]
#[command(about = "Company API - CRUD over companies plus item and student title lookups")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Port to listen on (overrides API_PORT / PORT)")]
    pub port: Option<u16>,

    #[arg(long, global = true, help = "Address to bind (overrides API_BIND_ADDRESS)")]
    pub bind: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Create the company, listofitem and student tables if missing")]
    InitSchema,
}

impl Cli {
    /// Command-line flags win over environment configuration
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.api.port = port;
        }
        if let Some(bind) = &self.bind {
            config.api.bind_address = bind.clone();
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    cli.apply_to(&mut config);
    tracing::info!("Starting Company API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config).context("failed to configure database pool")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let state = AppState::new(Arc::new(MySqlRepository::new(pool.clone())));
            server::serve(server::app(state, &config), &config)
                .await
                .context("server error")?;
        }
        Commands::InitSchema => {
            DatabaseManager::init_schema(&pool)
                .await
                .context("failed to create schema")?;
        }
    }

    DatabaseManager::close(pool).await;
    Ok(())
}
