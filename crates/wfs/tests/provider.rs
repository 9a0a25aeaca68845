#![allow(missing_docs)]

use anyhow::{Context, Result, anyhow};
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use wfs::{Config, HttpFetch};

/// Canned last-position response, trimmed from a live GetFeature reply.
pub const POSITIONS: &str = r#"{
    "type": "FeatureCollection",
    "totalFeatures": 2,
    "features": [
        {
            "type": "Feature",
            "id": "Ultima_Posicao_Transmitida.1",
            "geometry": {"type": "Point", "coordinates": [-47.9292, -15.7801]},
            "geometry_name": "geometria",
            "properties": {
                "numerolinha": "0.032",
                "imei": 356938035643809,
                "latitude": -15.7801,
                "longitude": -47.9292,
                "velocidade": 32.5,
                "prefixo": "TP-1234"
            }
        },
        {
            "type": "Feature",
            "id": "Ultima_Posicao_Transmitida.2",
            "geometry": {"type": "Point", "coordinates": [-48.0301, -15.8422]},
            "geometry_name": "geometria",
            "properties": {
                "numerolinha": "0.032",
                "imei": "356938035643810",
                "latitude": -15.8422,
                "longitude": -48.0301,
                "velocidade": 0,
                "prefixo": "TP-5678"
            }
        }
    ],
    "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:EPSG::4326"}}
}"#;

/// Canned scheduled-trips response.
pub const TRIPS: &str = r#"{
    "type": "FeatureCollection",
    "totalFeatures": 2,
    "features": [
        {
            "type": "Feature",
            "id": "Viagens_Programadas_por_Linha.1",
            "geometry": null,
            "properties": {
                "hora_prevista": "5:30",
                "nm_operadora": "VIACAO PIONEIRA",
                "tx_denominacao_linha": "RODOVIARIA / SETOR O",
                "cs_sentido": "I",
                "st_domingo": "N",
                "st_segunda": "S",
                "st_terca": "S",
                "st_quarta": "S",
                "st_quinta": "S",
                "st_sexta": "S",
                "st_sabado": "N"
            }
        },
        {
            "type": "Feature",
            "id": "Viagens_Programadas_por_Linha.2",
            "geometry": null,
            "properties": {
                "hora_prevista": "22:45",
                "nm_operadora": "VIACAO PIONEIRA",
                "tx_denominacao_linha": "RODOVIARIA / SETOR O",
                "cs_sentido": "I",
                "st_domingo": "S",
                "st_segunda": "N",
                "st_terca": "N",
                "st_quarta": "N",
                "st_quinta": "N",
                "st_sexta": "N",
                "st_sabado": "S"
            }
        }
    ]
}"#;

#[derive(Clone)]
pub struct MockProvider {
    pub status: StatusCode,
    pub positions: String,
    pub trips: String,
}

impl MockProvider {
    #[allow(unused)]
    #[must_use]
    pub fn new() -> Self {
        Self { status: StatusCode::OK, positions: POSITIONS.to_string(), trips: TRIPS.to_string() }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetch for MockProvider {
    async fn fetch(&self, request: Request<()>) -> Result<Response<Bytes>> {
        let query = request.uri().query().unwrap_or("");

        let body = if query.contains("Ultima%20Posicao%20Transmitida") {
            self.positions.clone()
        } else if query.contains("Viagens%20Programadas%20por%20Linha") {
            self.trips.clone()
        } else {
            return Err(anyhow!("unknown layer in query: {query}"));
        };

        Response::builder()
            .status(self.status)
            .body(Bytes::from(body))
            .context("failed to build response")
    }
}

impl Config for MockProvider {
    async fn get(&self, key: &str) -> Result<String> {
        match key {
            "WFS_URL" => Ok("http://localhost:8080/geoserver/semob/ows".to_string()),
            _ => Err(anyhow!("unknown config key: {key}")),
        }
    }
}
