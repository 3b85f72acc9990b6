use std::time::Instant;

use avmon_api::models::HealthResponse;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone)]
pub struct HealthState {
    pub started_at: Instant,
}

pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route("/health", get(get_health))
        .with_state(state)
}

pub async fn get_index() -> Json<Value> {
    Json(json!({
        "message": "AV Monitoring System - Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "test": "GET /api/test-inventory",
            "rooms": "GET /api/rooms",
            "roomStats": "GET /api/rooms/stats",
            "roomDetails": "GET /api/rooms/:id",
            "roomActivity": "GET /api/rooms/:id/activity",
            "devices": "GET /api/devices",
            "deviceStats": "GET /api/devices/stats",
            "alerts": "GET /api/alerts",
            "locations": "GET /api/locations",
            "docs": "GET /api-docs/openapi.json",
            "health": "GET /health"
        }
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn get_health(State(state): State<HealthState>) -> Json<HealthResponse> {
    let now = OffsetDateTime::now_utc();

    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: now.format(&Rfc3339).unwrap_or_else(|_| now.to_string()),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
