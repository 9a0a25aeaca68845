//! HTTP routes for the bus location service.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::{Value, json};
use transit::{BusPosition, Direction, HttpResult, ScheduleIndex, not_found};
use wfs::FeatureCollection;

use crate::map;
use crate::provider::LiveProvider;

/// Wall-clock zone used for estimated arrival times.
const TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Builds the service router.
pub fn router(provider: LiveProvider) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/buses/{line}", get(buses))
        .route("/map/{line}", get(map_view))
        .route("/schedules/{direction}/{line}", get(schedules))
        .route("/arrival/{line}/{lat}/{lon}", get(arrival))
        .with_state(provider)
}

async fn index() -> Json<Value> {
    Json(json!({
        "service": "busmap",
        "endpoints": [
            "/buses/{line}",
            "/map/{line}",
            "/schedules/{direction}/{line}",
            "/arrival/{line}/{lat}/{lon}",
        ],
    }))
}

/// Raw upstream feature collection for a line.
#[axum::debug_handler]
async fn buses(
    State(provider): State<LiveProvider>, Path(line): Path<String>,
) -> HttpResult<Json<FeatureCollection<BusPosition>>> {
    let collection = wfs::positions_by_line(&line, &provider).await?;
    if collection.features.is_empty() {
        return Err(not_found!("no buses found for line {line}").into());
    }

    Ok(Json(collection))
}

/// Marker map for a line's bus positions.
#[axum::debug_handler]
async fn map_view(
    State(provider): State<LiveProvider>, Path(line): Path<String>,
) -> HttpResult<Html<String>> {
    let collection = wfs::positions_by_line(&line, &provider).await?;
    if collection.features.is_empty() {
        return Err(not_found!("no buses found for line {line}").into());
    }

    Ok(Html(map::render(&collection.features)))
}

/// Weekly departure schedule for a line and direction.
#[axum::debug_handler]
async fn schedules(
    State(provider): State<LiveProvider>, Path((direction, line)): Path<(String, String)>,
) -> HttpResult<Json<ScheduleIndex>> {
    let direction: Direction = direction.parse()?;
    let trips = wfs::scheduled_trips(&line, direction, &provider).await?;

    Ok(Json(transit::bucketize(&trips)))
}

/// Reply for `GET /arrival/{line}/{lat}/{lon}`.
#[derive(Debug, Clone, Serialize)]
pub struct ArrivalReply {
    /// Properties of the nearest bus.
    #[serde(rename = "onibus")]
    pub bus: BusPosition,

    /// Estimated travel time in minutes, stop buffer included.
    #[serde(rename = "tempo_chegada_minutos")]
    pub total_minutes: f64,

    /// Estimated arrival time, "HH:MM".
    #[serde(rename = "hora_estimada")]
    pub estimated_time: String,
}

/// Nearest bus of a line and its estimated arrival at the rider's location.
#[axum::debug_handler]
async fn arrival(
    State(provider): State<LiveProvider>, Path((line, lat, lon)): Path<(String, f64, f64)>,
) -> HttpResult<Json<ArrivalReply>> {
    let collection = wfs::positions_by_line(&line, &provider).await?;
    let buses: Vec<BusPosition> =
        collection.features.into_iter().map(|feature| feature.properties).collect();
    if buses.is_empty() {
        return Err(not_found!("no buses found for line {line}").into());
    }

    let now = Utc::now().with_timezone(&TIMEZONE);
    let estimate = transit::estimate_arrival(lat, lon, &buses, now)?;

    Ok(Json(ArrivalReply {
        bus: estimate.bus,
        total_minutes: estimate.total_minutes,
        estimated_time: estimate.arrival_time.format("%H:%M").to_string(),
    }))
}
