use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `OK` while the process is serving
    pub status: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
}
