use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    /// Free-text location as reported upstream, `Unknown` when absent
    pub name: String,
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub total_devices: usize,
    pub online_devices: usize,
}

impl LocationSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<LocationSummary>,
}
