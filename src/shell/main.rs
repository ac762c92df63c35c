use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use employee_leave::shared::core::primitives::SystemClock;
use employee_leave::shell::config::AppConfig;
use employee_leave::shell::http::router;
use employee_leave::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now, keyed by the configured table name.
    let state = AppState::in_memory(config.table_name.clone(), Arc::new(SystemClock));
    let app = router(state);

    tracing::info!(table = %config.table_name, "HTTP endpoint: http://{}/v1/employees", config.http_addr);
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
