//! WFS `GetFeature` query construction.

use transit::Direction;
use urlencoding::encode;

/// Upstream layer carrying the last transmitted position of each vehicle.
pub const LAYER_LAST_POSITION: &str = "semob:Ultima Posicao Transmitida";

/// Upstream layer carrying the scheduled trips of each line.
pub const LAYER_SCHEDULED_TRIPS: &str = "semob:Viagens Programadas por Linha";

/// A `GetFeature` query against a fixed upstream layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFeature {
    layer: &'static str,
    filter: String,
}

impl GetFeature {
    /// Last transmitted positions of every bus on the given line.
    #[must_use]
    pub fn positions(line: &str) -> Self {
        Self { layer: LAYER_LAST_POSITION, filter: format!("numerolinha='{line}'") }
    }

    /// Scheduled trips of the given line and direction.
    #[must_use]
    pub fn scheduled_trips(line: &str, direction: Direction) -> Self {
        Self {
            layer: LAYER_SCHEDULED_TRIPS,
            filter: format!("cd_linha='{line}' AND cs_sentido='{}'", direction.code()),
        }
    }

    /// Full request URL against the given WFS endpoint.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{base_url}?service=WFS&version=1.0.0&request=GetFeature&typeName={}&outputFormat={}&CQL_FILTER={}",
            encode(self.layer),
            encode("application/json"),
            encode(&self.filter),
        )
    }
}
