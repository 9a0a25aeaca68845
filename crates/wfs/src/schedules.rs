//! Scheduled trip queries against the scheduled-trips layer.

use anyhow::{Context, Result};
use http::Method;
use transit::{Direction, Error, TripRecord, bad_gateway};

use crate::provider::{Config, HttpFetch};
use crate::query::GetFeature;
use crate::types::FeatureCollection;

/// Retrieves the scheduled trips of a line in one direction.
///
/// # Errors
///
/// Returns an error when the WFS request fails or the response cannot be
/// deserialized.
pub async fn scheduled_trips<P>(
    line: &str, direction: Direction, provider: &P,
) -> Result<Vec<TripRecord>>
where
    P: Config + HttpFetch,
{
    let wfs_url = Config::get(provider, "WFS_URL").await.context("getting `WFS_URL`")?;
    let url = GetFeature::scheduled_trips(line, direction).url(&wfs_url);

    let request = http::Request::builder()
        .method(Method::GET)
        .uri(url)
        .header("Accept", "application/json")
        .body(())
        .context("building scheduled trips request")?;

    let response = HttpFetch::fetch(provider, request)
        .await
        .with_context(|| format!("fetching scheduled trips for line {line}"))?;

    if !response.status().is_success() {
        return Err(bad_gateway!("WFS responded {} for line {line}", response.status()).into());
    }

    let body = response.into_body();
    let collection: FeatureCollection<TripRecord> =
        serde_json::from_slice(&body).map_err(Error::from).context("decoding scheduled trips")?;

    Ok(collection.features.into_iter().map(|feature| feature.properties).collect())
}
