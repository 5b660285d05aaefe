#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, HostConfig};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    tracing::info!(api_base_url = %config.api_base_url, public_site_url = %config.public_site_url, "configuration loaded");

    let app = routes::app(&config)?;
    let addr = config.bind_addr();
    let listener =
        tokio::net::TcpListener::bind(&addr).await.map_err(|source| ConfigError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "coffercard listening");
    axum::serve(listener, app).await.map_err(ConfigError::Serve)
}
