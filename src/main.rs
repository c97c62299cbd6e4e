use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use medina_backend::config::Config;
use medina_backend::create_app;
use medina_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();

    info!(
        "Loaded configuration: port={} log_level={} debug={}",
        config.port, config.log_level, config.debug
    );

    let state = AppState::new(config.clone());
    let app = create_app(state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
