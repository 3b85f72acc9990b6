use avmon_api::models::{ErrorResponse, RoomDetailResponse, RoomListResponse, RoomStatsResponse};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::InventoryState;
use crate::errors::ApiError;
use crate::services::{inventory, paths};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RoomListQuery {
    /// Echo the untouched vendor payload alongside the rooms
    #[serde(default)]
    pub raw: bool,
}

pub fn room_router(state: InventoryState) -> Router {
    Router::new()
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/stats", get(get_room_stats))
        .route("/api/rooms/:room_id", get(get_room))
        .route("/api/rooms/:room_id/activity", get(get_room_activity))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "room",
    params(
        ("raw" = Option<bool>, Query, description = "Include the vendor payload as rawResponse")
    ),
    responses(
        (status = 200, description = "Rooms as reported by the vendor", body = RoomListResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_rooms(
    State(state): State<InventoryState>,
    Query(query): Query<RoomListQuery>,
) -> Result<Json<RoomListResponse>, ApiError> {
    let payload = state.inventory().await?;
    let rooms = inventory::room_values(&payload).to_vec();

    Ok(Json(RoomListResponse {
        success: true,
        count: rooms.len(),
        data: rooms,
        raw_response: query.raw.then_some(payload),
    }))
}

#[utoipa::path(
    get,
    path = "/api/rooms/stats",
    tag = "room",
    responses(
        (status = 200, description = "Room availability figures", body = RoomStatsResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_room_stats(
    State(state): State<InventoryState>,
) -> Result<Json<RoomStatsResponse>, ApiError> {
    let rooms = inventory::rooms(&state.inventory().await?);

    Ok(Json(RoomStatsResponse {
        success: true,
        data: inventory::room_stats(&rooms),
    }))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    tag = "room",
    params(
        ("room_id" = String, Path, description = "Vendor room ID")
    ),
    responses(
        (status = 200, description = "Vendor room information", body = RoomDetailResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_room(
    State(state): State<InventoryState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailResponse>, ApiError> {
    if !paths::is_valid_room_id(&room_id) {
        return Err(ApiError::InvalidRoomId(room_id));
    }

    let data = state
        .upstream
        .fetch(&paths::room_info(&state.org_id, &room_id))
        .await?;

    Ok(Json(RoomDetailResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/activity",
    tag = "room",
    params(
        ("room_id" = String, Path, description = "Vendor room ID")
    ),
    responses(
        (status = 200, description = "Vendor room activity", body = RoomDetailResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_room_activity(
    State(state): State<InventoryState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailResponse>, ApiError> {
    if !paths::is_valid_room_id(&room_id) {
        return Err(ApiError::InvalidRoomId(room_id));
    }

    let data = state
        .upstream
        .fetch(&paths::room_activity(&state.org_id, &room_id))
        .await?;

    Ok(Json(RoomDetailResponse {
        success: true,
        data,
    }))
}
