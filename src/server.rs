//! Router assembly and the HTTP listener.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::database::CompanyStore;
use crate::handlers;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanyStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CompanyStore>) -> Self {
        Self { store }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(company_routes())
        .merge(lookup_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(config));

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/companies",
            get(handlers::company_list).post(handlers::company_create),
        )
        .route(
            "/api/companies/:company_id",
            axum::routing::patch(handlers::company_update)
                .put(handlers::company_upsert)
                .delete(handlers::company_delete),
        )
}

fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(handlers::item_list))
        .route("/api/studenttitles", get(handlers::student_title_list))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.security.cors_origins.is_empty() {
        // If no origins configured, use permissive for development
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind and serve until Ctrl-C
pub async fn serve(app: Router, config: &AppConfig) -> std::io::Result<()> {
    let bind_addr = config.socket_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Company API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler we keep serving until the process is killed
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
