mod alert;
mod device;
mod health;
mod location;
mod probe;
mod room;

pub use alert::*;
pub use device::*;
pub use health::*;
pub use location::*;
pub use probe::*;
pub use room::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by every endpoint when the request could not be served.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human readable failure message
    pub error: String,
    /// Upstream response body, when the vendor sent one
    #[cfg_attr(feature = "docs", schema(value_type = Option<Object>))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details,
        }
    }
}
