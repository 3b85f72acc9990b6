use avmon_api::models::{DeviceListResponse, DeviceStatsResponse, ErrorResponse};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::InventoryState;
use crate::errors::ApiError;
use crate::services::inventory;

pub fn device_router(state: InventoryState) -> Router {
    Router::new()
        .route("/api/devices", get(get_devices))
        .route("/api/devices/stats", get(get_device_stats))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/devices",
    tag = "device",
    responses(
        (status = 200, description = "Devices of every room, tagged with their room", body = DeviceListResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_devices(
    State(state): State<InventoryState>,
) -> Result<Json<DeviceListResponse>, ApiError> {
    let payload = state.inventory().await?;
    let devices = inventory::device_entries(inventory::room_values(&payload));

    Ok(Json(DeviceListResponse {
        success: true,
        count: devices.len(),
        data: devices,
    }))
}

#[utoipa::path(
    get,
    path = "/api/devices/stats",
    tag = "device",
    responses(
        (status = 200, description = "Device online figures", body = DeviceStatsResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_device_stats(
    State(state): State<InventoryState>,
) -> Result<Json<DeviceStatsResponse>, ApiError> {
    let rooms = inventory::rooms(&state.inventory().await?);

    Ok(Json(DeviceStatsResponse {
        success: true,
        data: inventory::device_stats(&rooms),
    }))
}
