//! Live position queries against the last-position layer.

use anyhow::{Context, Result};
use http::Method;
use transit::{BusPosition, Error, bad_gateway};

use crate::provider::{Config, HttpFetch};
use crate::query::GetFeature;
use crate::types::FeatureCollection;

/// Retrieves the last transmitted position of every bus on a line.
///
/// # Errors
///
/// Returns an error when the WFS request fails or the response cannot be
/// deserialized.
pub async fn positions_by_line<P>(
    line: &str, provider: &P,
) -> Result<FeatureCollection<BusPosition>>
where
    P: Config + HttpFetch,
{
    let wfs_url = Config::get(provider, "WFS_URL").await.context("getting `WFS_URL`")?;
    let url = GetFeature::positions(line).url(&wfs_url);

    let request = http::Request::builder()
        .method(Method::GET)
        .uri(url)
        .header("Accept", "application/json")
        .body(())
        .context("building positions request")?;

    let response = HttpFetch::fetch(provider, request)
        .await
        .with_context(|| format!("fetching positions for line {line}"))?;

    if !response.status().is_success() {
        return Err(bad_gateway!("WFS responded {} for line {line}", response.status()).into());
    }

    let body = response.into_body();
    let collection: FeatureCollection<BusPosition> =
        serde_json::from_slice(&body).map_err(Error::from).context("decoding positions")?;

    tracing::debug!("line {line}: {} positions", collection.features.len());
    Ok(collection)
}
