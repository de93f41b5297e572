//! Checks that the configured database is reachable and bootstrapped.

use employer_store::infra::{config::AppConfig, logging};
use employer_store::{EmployerRepository, EmployerService};

fn usage() -> &'static str {
    "Usage: cargo run --bin preflight\n\
     \n\
     Requires env vars:\n\
       DATABASE_URL\n\
     Optional:\n\
       DB_MAX_CONNECTIONS, DB_BUSY_TIMEOUT_MS, API_BIND_ADDR\n"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    if std::env::args().skip(1).any(|a| a == "-h" || a == "--help") {
        eprint!("{}", usage());
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    tracing::info!(
        event = "preflight",
        database_url = %config.database.url,
        bind_addr = %config.bind_addr,
        max_connections = config.database.max_connections
    );

    let service = EmployerService::connect(&config.database).await?;
    service.ping().await?;
    let rows = service.count().await?;
    tracing::info!(event = "preflight", status = "ok", employers = rows);

    service.close().await;
    Ok(())
}
