use axum::http::StatusCode;
use serde_json::json;

use avmon_server::services::{MockUpstream, paths};

mod common;
use common::mock_app::{MockApp, ORG_ID};

#[tokio::test]
async fn test_health() {
    let app = MockApp::new(MockUpstream::new());

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("OK"));
    assert!(body["timestamp"].is_string());
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(app.upstream.requests().is_empty());
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let app = MockApp::new(MockUpstream::new());

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("running"));
    assert_eq!(body["endpoints"]["alerts"], json!("GET /api/alerts"));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = MockApp::new(MockUpstream::new());

    let (status, body) = app.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/rooms/stats"].is_object());
    assert!(body["paths"]["/api/locations"].is_object());
    assert!(body["paths"]["/api/test-inventory"].is_object());
    assert!(body["components"]["schemas"]["ProbeResponse"].is_object());
}

#[tokio::test]
async fn test_inventory_probe() {
    let candidates = paths::inventory_candidates(ORG_ID);
    let app = MockApp::new(
        MockUpstream::new()
            .with_json(candidates[3].clone(), json!({ "rooms": [{ "id": 1 }] }))
            .with_response(candidates[4].clone(), 204, serde_json::Value::Null)
            .with_status(candidates[0].clone(), 401, None),
    );

    let (status, body) = app.get("/api/test-inventory").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.upstream.requests(), candidates);

    let results = &body["results"];
    assert_eq!(results.as_object().unwrap().len(), candidates.len());
    assert_eq!(results[&candidates[3]]["status"], json!("success"));
    assert_eq!(results[&candidates[3]]["hasRooms"], json!(true));
    assert_eq!(results[&candidates[3]]["statusCode"], json!(200));
    assert_eq!(results[&candidates[4]]["status"], json!("success"));
    assert_eq!(results[&candidates[4]]["statusCode"], json!(204));
    assert_eq!(results[&candidates[0]]["status"], json!("failed"));
    assert_eq!(results[&candidates[0]]["statusCode"], json!(401));
    assert_eq!(results[&candidates[1]]["statusCode"], json!(404));
}
