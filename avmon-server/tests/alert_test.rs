use axum::http::StatusCode;
use serde_json::json;

use avmon_server::services::{MockUpstream, paths};

mod common;
use common::mock_app::{MockApp, ORG_ID, sample_inventory};

#[tokio::test]
async fn test_get_alerts() {
    let app = MockApp::with_inventory(sample_inventory());

    let (status, body) = app.get("/api/alerts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(2));

    assert_eq!(
        body["data"][0],
        json!({
            "id": "room-2",
            "type": "Room Offline",
            "name": "Huddle 4",
            "location": "London",
            "timestamp": "2025-02-28T08:00:00Z",
            "severity": "high"
        })
    );

    let device_alert = &body["data"][1];
    assert_eq!(device_alert["id"], json!("device-b"));
    assert_eq!(device_alert["type"], json!("Device Offline"));
    assert_eq!(device_alert["deviceType"], json!("Controller"));
    assert_eq!(device_alert["roomName"], json!("Huddle 4"));
    assert_eq!(device_alert["severity"], json!("medium"));
    assert!(device_alert["timestamp"].is_string());
}

#[tokio::test]
async fn test_no_alerts_when_everything_is_online() {
    let app = MockApp::with_inventory(json!([
        { "id": 1, "online": true, "devices": [{ "id": "a", "online": true }] }
    ]));

    let (_, body) = app.get("/api/alerts").await;

    assert_eq!(body["count"], json!(0));
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_alerts_fail_with_upstream() {
    let app = MockApp::new(MockUpstream::new().with_status(paths::rooms(ORG_ID), 503, None));

    let (status, body) = app.get("/api/alerts").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
}
