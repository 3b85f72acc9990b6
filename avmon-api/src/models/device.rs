use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStats {
    /// Devices across all rooms
    pub total: usize,
    /// Devices flagged online
    pub online: usize,
    pub offline: usize,
    /// Online share, rounded to a whole percent
    pub percentage: u8,
    pub change_vs_last_month: i32,
}

/// A vendor device record carrying the identity of the room it was found in.
///
/// The vendor fields are kept verbatim; the room fields replace any device
/// field of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEntry {
    #[serde(flatten)]
    pub device: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceListResponse {
    pub success: bool,
    pub count: usize,
    #[cfg_attr(feature = "docs", schema(value_type = Vec<Object>))]
    pub data: Vec<DeviceEntry>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStatsResponse {
    pub success: bool,
    pub data: DeviceStats,
}
