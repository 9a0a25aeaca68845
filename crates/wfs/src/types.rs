//! GeoJSON feature envelope returned by `GetFeature`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Feature collection envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection<P> {
    /// Features matching the query filter.
    #[serde(default = "Vec::new")]
    pub features: Vec<Feature<P>>,

    /// Remaining envelope fields (`crs`, `totalFeatures`, ...), passed
    /// through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One feature: typed attribute properties plus an optional point geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature<P> {
    /// Attribute properties of the feature.
    pub properties: P,

    /// Point geometry, when the layer carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,

    /// Remaining feature fields (`id`, `geometry_name`, ...), passed
    /// through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Point geometry in WGS84 lon/lat order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geometry type, "Point" for both upstream layers.
    #[serde(rename = "type")]
    pub kind: String,

    /// Coordinates as upstream orders them: longitude first.
    pub coordinates: Vec<f64>,
}

impl Geometry {
    /// Longitude component, when present.
    #[must_use]
    pub fn lon(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }

    /// Latitude component, when present.
    #[must_use]
    pub fn lat(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }
}
