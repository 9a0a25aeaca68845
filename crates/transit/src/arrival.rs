//! Nearest-bus arrival estimator.

use chrono::{DateTime, Duration, TimeZone};
use geo::{Distance, Geodesic, Point};

use crate::error::Error;
use crate::model::BusPosition;

/// Fixed share of travel time added for stops and speed variance.
const STOP_BUFFER: f64 = 0.20;

/// Arrival estimate for the bus nearest to a rider.
#[derive(Debug, Clone)]
pub struct ArrivalEstimate<Tz: TimeZone> {
    /// The nearest bus.
    pub bus: BusPosition,

    /// Estimated travel time in minutes, buffer included.
    pub total_minutes: f64,

    /// Estimated wall-clock arrival time.
    pub arrival_time: DateTime<Tz>,
}

/// Selects the bus nearest to the rider and projects its arrival time.
///
/// Distances are ellipsoidal (WGS84) geodesics; the nearest bus wins on a
/// strict comparison, so ties resolve to the first bus in input order.
///
/// # Errors
///
/// Returns [`Error::EmptyFleet`] when `buses` is empty and
/// [`Error::InvalidSpeed`] when the selected bus reports a speed of zero or
/// less.
pub fn estimate_arrival<Tz: TimeZone>(
    rider_lat: f64, rider_lon: f64, buses: &[BusPosition], now: DateTime<Tz>,
) -> crate::Result<ArrivalEstimate<Tz>> {
    if buses.is_empty() {
        return Err(Error::EmptyFleet);
    }

    let rider = Point::new(rider_lon, rider_lat);

    let mut nearest = &buses[0];
    let mut nearest_km = f64::INFINITY;
    for bus in buses {
        let km = geodesic_km(rider, Point::new(bus.longitude, bus.latitude));
        if km < nearest_km {
            nearest_km = km;
            nearest = bus;
        }
    }

    if nearest.speed_kmh <= 0.0 {
        return Err(Error::InvalidSpeed(format!("{} km/h", nearest.speed_kmh)));
    }

    let raw_minutes = nearest_km / nearest.speed_kmh * 60.0;
    let total_minutes = raw_minutes * (1.0 + STOP_BUFFER);
    let arrival_time = now + Duration::milliseconds((total_minutes * 60_000.0) as i64);

    Ok(ArrivalEstimate { bus: nearest.clone(), total_minutes, arrival_time })
}

// Ellipsoidal distance in kilometres between two WGS84 lon/lat points.
fn geodesic_km(from: Point, to: Point) -> f64 {
    Geodesic.distance(from, to) / 1_000.0
}
