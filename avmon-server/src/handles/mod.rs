pub mod alert_handle;
pub mod device_handle;
pub mod health_handle;
pub mod location_handle;
pub mod probe_handle;
pub mod room_handle;

pub use alert_handle::*;
pub use device_handle::*;
pub use health_handle::*;
pub use location_handle::*;
pub use probe_handle::*;
pub use room_handle::*;

use std::sync::Arc;

use serde_json::Value;

use crate::errors::UpstreamError;
use crate::services::{Upstream, paths};

/// Shared by every endpoint that reads the vendor inventory.
#[derive(Clone)]
pub struct InventoryState {
    pub upstream: Arc<dyn Upstream>,
    pub org_id: Arc<str>,
}

impl InventoryState {
    pub fn new(upstream: Arc<dyn Upstream>, org_id: impl Into<Arc<str>>) -> Self {
        Self {
            upstream,
            org_id: org_id.into(),
        }
    }

    /// Fresh room inventory payload, fetched on every call.
    pub async fn inventory(&self) -> Result<Value, UpstreamError> {
        self.upstream.fetch(&paths::rooms(&self.org_id)).await
    }
}
