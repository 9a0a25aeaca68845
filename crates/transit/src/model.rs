//! Typed views of the upstream WFS feature properties.

use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Error;

/// Travel direction of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// The "ida" leg, towards the end of the line.
    #[serde(rename = "I")]
    Inbound,

    /// The "volta" leg, back towards the start of the line.
    #[serde(rename = "V")]
    Outbound,
}

impl Direction {
    /// The single-letter code used by the upstream `cs_sentido` field.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Inbound => "I",
            Self::Outbound => "V",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbound" | "ida" => Ok(Self::Inbound),
            "outbound" | "volta" => Ok(Self::Outbound),
            other => Err(Error::NotFound(format!("unknown direction: {other}"))),
        }
    }
}

/// One scheduled trip from the `Viagens Programadas por Linha` layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    /// Scheduled departure time, "H:MM" or "HH:MM".
    #[serde(rename = "hora_prevista")]
    pub scheduled_time: String,

    /// Operating company name.
    #[serde(rename = "nm_operadora")]
    pub operator: String,

    /// Full line denomination.
    #[serde(rename = "tx_denominacao_linha")]
    pub line_name: String,

    /// Travel direction.
    #[serde(rename = "cs_sentido")]
    pub direction: Direction,

    /// Runs on Sundays.
    #[serde(rename = "st_domingo", with = "day_flag")]
    pub runs_on_sunday: bool,

    /// Runs on Mondays.
    #[serde(rename = "st_segunda", with = "day_flag")]
    pub runs_on_monday: bool,

    /// Runs on Tuesdays.
    #[serde(rename = "st_terca", with = "day_flag")]
    pub runs_on_tuesday: bool,

    /// Runs on Wednesdays.
    #[serde(rename = "st_quarta", with = "day_flag")]
    pub runs_on_wednesday: bool,

    /// Runs on Thursdays.
    #[serde(rename = "st_quinta", with = "day_flag")]
    pub runs_on_thursday: bool,

    /// Runs on Fridays.
    #[serde(rename = "st_sexta", with = "day_flag")]
    pub runs_on_friday: bool,

    /// Runs on Saturdays.
    #[serde(rename = "st_sabado", with = "day_flag")]
    pub runs_on_saturday: bool,
}

/// One live vehicle from the `Ultima Posicao Transmitida` layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusPosition {
    /// Line number the vehicle is serving.
    #[serde(rename = "numerolinha", deserialize_with = "string_or_number")]
    pub line: String,

    /// Onboard unit identifier.
    #[serde(deserialize_with = "string_or_number")]
    pub imei: String,

    /// WGS84 latitude, decimal degrees.
    pub latitude: f64,

    /// WGS84 longitude, decimal degrees.
    pub longitude: f64,

    /// Last reported speed, km/h.
    #[serde(rename = "velocidade")]
    pub speed_kmh: f64,

    /// Remaining upstream properties, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Day-of-week activity flags arrive as "S"/"N" strings. Anything other than
// "S" counts as not running, matching the upstream comparison.
mod day_flag {
    use super::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flag = String::deserialize(deserializer)?;
        Ok(flag == "S")
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "S" } else { "N" })
    }
}

// Upstream serializes some identifiers as numbers and some as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected string or number, got {other}"))),
    }
}
