//! Live provider backed by a shared reqwest client.

use anyhow::{Context, Result, anyhow};
use bytes::Bytes;
use http::{Request, Response};
use wfs::{Config, HttpFetch};

use crate::config;

/// Provider used by the running service.
#[derive(Clone)]
pub struct LiveProvider {
    client: reqwest::Client,
}

impl LiveProvider {
    /// Builds the provider, applying the certificate-verification toggle.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let verify = config::verify_upstream_cert();
        if !verify {
            tracing::warn!("upstream certificate verification is disabled");
        }

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!verify)
            .build()
            .context("building HTTP client")?;

        Ok(Self { client })
    }
}

impl HttpFetch for LiveProvider {
    async fn fetch(&self, request: Request<()>) -> Result<Response<Bytes>> {
        let url = request.uri().to_string();

        let response = self
            .client
            .get(&url)
            .headers(request.headers().clone())
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?;

        let status = response.status();
        let body = response.bytes().await.context("reading response body")?;

        Response::builder().status(status).body(body).context("building response")
    }
}

impl Config for LiveProvider {
    async fn get(&self, key: &str) -> Result<String> {
        match key {
            "WFS_URL" => Ok(config::wfs_url()),
            _ => Err(anyhow!("unknown config key: {key}")),
        }
    }
}
