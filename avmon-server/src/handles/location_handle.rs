use avmon_api::models::{ErrorResponse, LocationListResponse};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::InventoryState;
use crate::errors::ApiError;
use crate::services::inventory;

pub fn location_router(state: InventoryState) -> Router {
    Router::new()
        .route("/api/locations", get(get_locations))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "location",
    responses(
        (status = 200, description = "Rooms grouped by location", body = LocationListResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_locations(
    State(state): State<InventoryState>,
) -> Result<Json<LocationListResponse>, ApiError> {
    let rooms = inventory::rooms(&state.inventory().await?);
    let locations = inventory::locations(&rooms);

    Ok(Json(LocationListResponse {
        success: true,
        count: locations.len(),
        data: locations,
    }))
}
