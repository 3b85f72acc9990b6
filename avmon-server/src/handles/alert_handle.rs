use avmon_api::models::{AlertListResponse, ErrorResponse};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use time::OffsetDateTime;

use super::InventoryState;
use crate::errors::ApiError;
use crate::services::inventory;

pub fn alert_router(state: InventoryState) -> Router {
    Router::new()
        .route("/api/alerts", get(get_alerts))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "alert",
    responses(
        (status = 200, description = "Offline rooms and devices", body = AlertListResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_alerts(
    State(state): State<InventoryState>,
) -> Result<Json<AlertListResponse>, ApiError> {
    let rooms = inventory::rooms(&state.inventory().await?);
    let alerts = inventory::alerts(&rooms, OffsetDateTime::now_utc());

    Ok(Json(AlertListResponse {
        success: true,
        count: alerts.len(),
        data: alerts,
    }))
}
