use std::net::SocketAddr;

use anyhow::Context;
use netstar::{Ctx, settings::Settings, tmdb::TmdbClient};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load before logging is set up so RUST_LOG may come from .env
    let dotenv = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("netstar=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv {
        warn!("No .env file loaded: {e}");
    }

    run().await.inspect_err(|e| error!("{e:#}"))
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    let client =
        TmdbClient::new(settings.tmdb_config()).context("Failed to create TMDB client")?;
    let app = netstar::app(Ctx::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        language = %settings.language,
        include_adult = settings.include_adult,
        "Listening on http://{addr}"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
