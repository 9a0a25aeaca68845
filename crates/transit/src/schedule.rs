//! Schedule bucketizer: scheduled trips into weekday/hour buckets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Direction, TripRecord};

/// Hour string to chronologically ordered departure entries.
///
/// A `BTreeMap` keeps the two-digit hour keys ascending, which for "00".."23"
/// is the same as numeric order.
pub type HourBuckets = BTreeMap<String, Vec<ScheduleEntry>>;

/// Weekly departure schedule for one line and direction.
///
/// Always carries all seven weekday keys, even when every bucket is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleIndex {
    pub domingo: HourBuckets,
    pub segunda: HourBuckets,
    pub terca: HourBuckets,
    pub quarta: HourBuckets,
    pub quinta: HourBuckets,
    pub sexta: HourBuckets,
    pub sabado: HourBuckets,
}

/// One departure within an hour bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Canonical "HH:MM" departure time.
    #[serde(rename = "horario")]
    pub time: String,

    /// Details shared by every departure of the trip.
    pub info: TripInfo,
}

/// Operator and line details attached to a departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripInfo {
    /// Operating company name.
    #[serde(rename = "operadora")]
    pub operator: String,

    /// Full line denomination.
    #[serde(rename = "denominacao_linha")]
    pub line_name: String,

    /// Travel direction.
    #[serde(rename = "sentido")]
    pub direction: Direction,
}

/// Groups scheduled trips by weekday and departure hour.
///
/// Each trip is appended to the hour bucket of every weekday it runs on,
/// keeping input order within a bucket. Malformed departure times degrade
/// through the midnight fallback rather than failing.
#[must_use]
pub fn bucketize(trips: &[TripRecord]) -> ScheduleIndex {
    let mut index = ScheduleIndex::default();

    for trip in trips {
        let (hour, minute) = split_time(&trip.scheduled_time);
        let entry = ScheduleEntry {
            time: format!("{hour}:{minute}"),
            info: TripInfo {
                operator: trip.operator.clone(),
                line_name: trip.line_name.clone(),
                direction: trip.direction,
            },
        };

        for (runs, buckets) in [
            (trip.runs_on_sunday, &mut index.domingo),
            (trip.runs_on_monday, &mut index.segunda),
            (trip.runs_on_tuesday, &mut index.terca),
            (trip.runs_on_wednesday, &mut index.quarta),
            (trip.runs_on_thursday, &mut index.quinta),
            (trip.runs_on_friday, &mut index.sexta),
            (trip.runs_on_saturday, &mut index.sabado),
        ] {
            if runs {
                buckets.entry(hour.clone()).or_default().push(entry.clone());
            }
        }
    }

    index
}

// Times just after midnight arrive without a separator. The hour then falls
// back to "00" and the minute is the raw value minus its first character,
// matching the upstream format.
fn split_time(raw: &str) -> (String, String) {
    let raw = raw.trim();
    match raw.split_once(':') {
        Some((hour, minute)) => (format!("{hour:0>2}"), minute.to_string()),
        None => ("00".to_string(), raw.get(1..).unwrap_or_default().to_string()),
    }
}
