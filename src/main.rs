//! Bus location service entry point.

mod config;
mod http;
mod map;
mod provider;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::provider::LiveProvider;

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let provider = LiveProvider::new()?;
    let router = http::router(provider);

    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr).await.with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, router).await.context("serving HTTP")
}
