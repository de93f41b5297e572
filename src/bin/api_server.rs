// src/bin/api_server.rs

use employer_store::infra::{config::AppConfig, logging};
use employer_store::transport;
use employer_store::EmployerService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = AppConfig::from_env()?;

    // --- Service Initialization ---
    tracing::info!(event = "startup", stage = "db_service");
    let service = EmployerService::connect(&config.database).await?;
    let app_state = transport::http::AppState::new(Arc::new(service.clone()));

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state).layer(cors);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        event = "startup",
        stage = "listening",
        addr = %listener.local_addr()?,
        "GET /employers, GET /health, GET /api-docs/openapi.json"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    service.close().await;
    tracing::info!(event = "shutdown", status = "ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(event = "shutdown", status = "error", error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!(event = "shutdown", status = "start");
}
