use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    /// Number of rooms reported upstream
    pub total: usize,
    /// Rooms flagged available or online
    pub available: usize,
    /// Rooms with neither flag set
    pub unavailable: usize,
    /// Available share, rounded to a whole percent
    pub percentage: u8,
    /// Trend figure shown next to the card
    pub change_vs_last_month: i32,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListResponse {
    pub success: bool,
    pub count: usize,
    /// Room records exactly as the vendor sent them
    #[cfg_attr(feature = "docs", schema(value_type = Vec<Object>))]
    pub data: Vec<Value>,
    /// Untouched upstream payload, only present with `?raw=true`
    #[cfg_attr(feature = "docs", schema(value_type = Option<Object>))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<Value>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatsResponse {
    pub success: bool,
    pub data: RoomStats,
}

/// Opaque vendor payload for a single room, used by both the detail and the activity endpoints.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailResponse {
    pub success: bool,
    #[cfg_attr(feature = "docs", schema(value_type = Object))]
    pub data: Value,
}
