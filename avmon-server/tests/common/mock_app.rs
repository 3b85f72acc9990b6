use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use avmon_server::app::create_router;
use avmon_server::services::{MockUpstream, paths};

pub const ORG_ID: &str = "org-test";

pub struct MockApp {
    pub router: Router,
    pub upstream: Arc<MockUpstream>,
}

impl MockApp {
    pub fn new(upstream: MockUpstream) -> Self {
        let upstream = Arc::new(upstream);
        let router = create_router(upstream.clone(), ORG_ID);

        Self { router, upstream }
    }

    /// App whose vendor inventory endpoint answers with `payload`.
    pub fn with_inventory(payload: Value) -> Self {
        Self::new(MockUpstream::new().with_json(paths::rooms(ORG_ID), payload))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }
}

/// Two rooms in two locations: one healthy, one offline with an offline device.
pub fn sample_inventory() -> Value {
    json!({
        "essentialRooms": [
            {
                "id": 1,
                "name": "Board Room",
                "location": "Melbourne",
                "available": true,
                "devices": [
                    { "id": "a", "name": "Rally Bar", "type": "Camera", "online": true }
                ]
            },
            {
                "id": 2,
                "name": "Huddle 4",
                "location": "London",
                "available": false,
                "lastSeen": "2025-02-28T08:00:00Z",
                "devices": [
                    { "id": "b", "name": "Tap", "type": "Controller", "online": false }
                ]
            }
        ]
    })
}
