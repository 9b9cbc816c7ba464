use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt};

use timecards::shell::config::Config;
use timecards::shell::http::router;
use timecards::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    // In-memory store for now
    let app = router(AppState::in_memory());

    let addr: SocketAddr = config.addr();
    tracing::info!("Timecards API: http://{}/timesheets", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
