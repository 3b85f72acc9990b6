use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "Room Offline")]
    RoomOffline,
    #[serde(rename = "Device Offline")]
    DeviceOffline,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlertKind::RoomOffline => write!(f, "Room Offline"),
            AlertKind::DeviceOffline => write!(f, "Device Offline"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// `room-<id>` or `device-<id>`
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Vendor device type, device alerts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Owning room name, device alerts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Vendor `lastSeen` value, or the time the alert was generated
    #[cfg_attr(feature = "docs", schema(value_type = Object))]
    pub timestamp: Value,
    pub severity: Severity,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Alert>,
}
