//! Leaflet marker map for live bus positions.

use std::fmt::Write as _;

use transit::BusPosition;
use wfs::Feature;

/// Initial view, centred on the Federal District.
const CENTER: (f64, f64) = (-15.8, -48.0);
const ZOOM: u8 = 14;

/// Renders a self-contained marker map document.
///
/// Coordinates are WGS84 throughout. The feature geometry takes precedence
/// over the reported position properties when both are present.
#[must_use]
pub fn render(features: &[Feature<BusPosition>]) -> String {
    let mut markers = String::new();
    for feature in features {
        let (lat, lon) = coordinates(feature);
        let popup =
            format!("Linha: {}<br>IMEI: {}", feature.properties.line, feature.properties.imei);
        let _ = writeln!(markers, "    L.marker([{lat}, {lon}]).addTo(map).bindPopup({popup:?});");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>busmap</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
    const map = L.map("map").setView([{lat}, {lon}], {zoom});
    L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
        attribution: "&copy; OpenStreetMap contributors"
    }}).addTo(map);
{markers}</script>
</body>
</html>
"#,
        lat = CENTER.0,
        lon = CENTER.1,
        zoom = ZOOM,
    )
}

// Prefer the feature's point geometry, falling back to the transmitted
// latitude/longitude properties.
fn coordinates(feature: &Feature<BusPosition>) -> (f64, f64) {
    let position = &feature.properties;
    feature.geometry.as_ref().map_or((position.latitude, position.longitude), |geometry| {
        (
            geometry.lat().unwrap_or(position.latitude),
            geometry.lon().unwrap_or(position.longitude),
        )
    })
}
