use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use avmon_client::client::DashboardClient;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A dashboard backend on a local port serving canned aggregates.
pub struct FakeBackend {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        Self::serve(Router::new().nest("/api", healthy_router(hits.clone())), hits).await
    }

    /// Every request fails the way the backend reports an upstream failure.
    pub async fn start_failing() -> Self {
        let router = Router::new().fallback(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Request failed with status code 401" })),
            )
        });
        Self::serve(router, Arc::new(AtomicUsize::new(0))).await
    }

    async fn serve(router: Router, hits: Arc<AtomicUsize>) -> Self {

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        Self {
            base_url: format!("http://{addr}/api"),
            hits,
        }
    }

    pub fn client(&self) -> DashboardClient {
        DashboardClient::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }
}

fn healthy_router(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route("/rooms", get(rooms))
        .route("/rooms/stats", get(room_stats))
        .route("/rooms/:room_id", get(room))
        .route("/rooms/:room_id/activity", get(room_activity))
        .route("/devices", get(devices))
        .route("/devices/stats", get(device_stats))
        .route("/alerts", get(alerts))
        .route("/locations", get(locations))
        .with_state(hits)
}

async fn rooms(State(hits): State<Arc<AtomicUsize>>) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "success": true,
        "count": 2,
        "data": [
            { "id": 1, "name": "Board Room", "location": "Melbourne", "available": true, "devices": [{ "id": "a" }] },
            { "id": 2, "name": "Huddle 4", "location": "London", "available": false, "devices": [] }
        ]
    }))
}

async fn room_stats() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": { "total": 2, "available": 1, "unavailable": 1, "percentage": 50, "changeVsLastMonth": 2 }
    }))
}

async fn room(Path(room_id): Path<String>) -> Json<Value> {
    Json(json!({ "success": true, "data": { "id": room_id, "name": "Board Room" } }))
}

async fn room_activity(Path(room_id): Path<String>) -> Json<Value> {
    Json(json!({ "success": true, "data": [{ "room": room_id, "event": "call started" }] }))
}

async fn devices() -> Json<Value> {
    Json(json!({
        "success": true,
        "count": 1,
        "data": [{ "id": "a", "online": true, "roomName": "Board Room", "roomId": 1, "location": "Melbourne" }]
    }))
}

async fn device_stats() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": { "total": 2, "online": 1, "offline": 1, "percentage": 50, "changeVsLastMonth": 2 }
    }))
}

async fn alerts() -> Json<Value> {
    let alert = |n: u32| {
        json!({
            "id": format!("device-{n}"),
            "type": "Device Offline",
            "name": format!("Panel {n}"),
            "location": "London",
            "timestamp": "2025-03-01T08:00:00Z",
            "severity": "medium"
        })
    };

    Json(json!({
        "success": true,
        "count": 4,
        "data": [
            { "id": "room-2", "type": "Room Offline", "name": "Huddle 4", "location": "London", "timestamp": "2025-03-01T08:00:00Z", "severity": "high" },
            alert(1),
            alert(2),
            alert(3)
        ]
    }))
}

async fn locations() -> Json<Value> {
    Json(json!({
        "success": true,
        "count": 2,
        "data": [
            { "name": "Melbourne", "totalRooms": 1, "availableRooms": 1, "totalDevices": 1, "onlineDevices": 1 },
            { "name": "London", "totalRooms": 1, "availableRooms": 0, "totalDevices": 0, "onlineDevices": 0 }
        ]
    }))
}
