use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of requesting one candidate inventory path from the vendor.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProbeResult {
    #[serde(rename_all = "camelCase")]
    Success {
        status_code: u16,
        /// Top level keys of an object payload
        data_keys: Vec<String>,
        /// Whether the payload carries `essentialRooms` or `rooms`
        has_rooms: bool,
        data_type: String,
        /// Truncated serialized payload
        sample: String,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub success: bool,
    pub message: String,
    pub results: BTreeMap<String, ProbeResult>,
}
