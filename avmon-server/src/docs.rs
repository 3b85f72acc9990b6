use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::handles::*;

#[derive(OpenApi)]
#[openapi(
    info(title = "AV Monitoring System", description = "Dashboard figures derived from the vendor room inventory"),
    paths(
        get_rooms,
        get_room_stats,
        get_room,
        get_room_activity,
        get_devices,
        get_device_stats,
        get_alerts,
        get_locations,
        get_health,
        test_inventory
    ),
    tags(
        (name = "room", description = "Room inventory and availability"),
        (name = "device", description = "Devices across all rooms"),
        (name = "alert", description = "Offline rooms and devices"),
        (name = "location", description = "Rooms grouped by location"),
        (name = "health", description = "Liveness"),
        (name = "probe", description = "Vendor inventory path discovery")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
