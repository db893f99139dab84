use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{serve, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::{load_config, load_secret};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config: Config = load_config("Config.toml")?;
    let api_key = load_secret("GEMINI_API_KEY");

    let router = serve(&config, api_key).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!(task = "listen", address = %address);

    Ok(axum::serve(listener, router).await?)
}
