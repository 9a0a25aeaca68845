#![allow(missing_docs)]

mod provider;

use http::StatusCode;
use pretty_assertions::assert_eq;
use transit::{Direction, Error};

use self::provider::MockProvider;

// Should decode a position feature collection, keeping unknown fields.
#[tokio::test]
async fn decode_positions() {
    let provider = MockProvider::new();

    let collection =
        wfs::positions_by_line("0.032", &provider).await.expect("should fetch positions");
    assert_eq!(collection.features.len(), 2);

    let first = &collection.features[0];
    assert_eq!(first.properties.line, "0.032");
    assert_eq!(first.properties.imei, "356938035643809");
    assert!(first.properties.latitude.eq(&-15.7801));
    assert!(first.properties.speed_kmh.eq(&32.5));
    assert_eq!(first.properties.extra["prefixo"], "TP-1234");

    let geometry = first.geometry.as_ref().expect("point geometry");
    assert_eq!(geometry.lon(), Some(-47.9292));
    assert_eq!(geometry.lat(), Some(-15.7801));

    // envelope fields survive for passthrough responses
    assert_eq!(collection.extra["totalFeatures"], 2);
    assert_eq!(collection.extra["crs"]["properties"]["name"], "urn:ogc:def:crs:EPSG::4326");
}

// Should decode scheduled trips with their day flags.
#[tokio::test]
async fn decode_scheduled_trips() {
    let provider = MockProvider::new();

    let trips = wfs::scheduled_trips("0.032", Direction::Inbound, &provider)
        .await
        .expect("should fetch trips");
    assert_eq!(trips.len(), 2);

    assert_eq!(trips[0].scheduled_time, "5:30");
    assert!(trips[0].runs_on_monday);
    assert!(!trips[0].runs_on_sunday);

    assert!(trips[1].runs_on_sunday);
    assert!(trips[1].runs_on_saturday);
    assert!(!trips[1].runs_on_friday);
}

// Should tolerate an empty feature collection.
#[tokio::test]
async fn empty_collection() {
    let mut provider = MockProvider::new();
    provider.positions = r#"{"type": "FeatureCollection", "features": []}"#.to_string();

    let collection =
        wfs::positions_by_line("9.999", &provider).await.expect("should fetch positions");
    assert!(collection.features.is_empty());
}

// Should surface a non-success upstream status as a bad gateway.
#[tokio::test]
async fn upstream_failure() {
    let mut provider = MockProvider::new();
    provider.status = StatusCode::INTERNAL_SERVER_ERROR;

    let err = wfs::positions_by_line("0.032", &provider).await.expect_err("should fail");
    let err: Error = err.into();

    assert!(matches!(err, Error::BadGateway(_)));
    assert_eq!(err.code(), StatusCode::BAD_GATEWAY);
}

// Should surface an undecodable payload as an invalid format.
#[tokio::test]
async fn invalid_payload() {
    let mut provider = MockProvider::new();
    provider.trips = "<ServiceExceptionReport/>".to_string();

    let err = wfs::scheduled_trips("0.032", Direction::Inbound, &provider)
        .await
        .expect_err("should fail");
    let err: Error = err.into();

    assert!(matches!(err, Error::InvalidFormat(_)));
}
