use serde::Deserialize;
use serde_json::Value;

use super::room::{EntityId, entity_id, flag, last_seen, text};

/// Lenient view of a vendor device nested under a room.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "text")]
    pub device_type: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub online: bool,
    #[serde(default, deserialize_with = "last_seen")]
    pub last_seen: Option<Value>,
}

impl Device {
    pub fn from_value(value: &Value) -> Self {
        Device::deserialize(value).unwrap_or_default()
    }
}
