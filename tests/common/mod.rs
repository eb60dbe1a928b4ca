use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

const BINARY: &str = env!("CARGO_BIN_EXE_company-api");

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

/// Each test owns its server; dropping it at the end of the test stops the process
impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// These tests need a real MySQL database; without DATABASE_URL they are skipped
pub fn database_configured() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").map(|v| !v.trim().is_empty()).unwrap_or(false)
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Make sure the tables exist before the server starts answering
        let status = Command::new(BINARY)
            .arg("init-schema")
            .stdin(Stdio::null())
            .status()
            .context("failed to run init-schema")?;
        anyhow::ensure!(status.success(), "init-schema exited with {}", status);

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let child = Command::new(BINARY)
            .env("API_PORT", port.to_string())
            .env("API_BIND_ADDRESS", "127.0.0.1")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Start a server for one test, or None when no database is configured
pub async fn start_server() -> Result<Option<TestServer>> {
    if !database_configured() {
        eprintln!("DATABASE_URL not set, skipping database-backed tests");
        return Ok(None);
    }
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(Some(server))
}

/// Company ids are at most 6 characters; keep runs from colliding
pub fn unique_id(prefix: char) -> String {
    format!("{}{:05}", prefix, std::process::id() % 100_000)
}
