use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::device::Device;

/// Lenient view of a vendor room record.
///
/// Only the fields the aggregators look at are read. Anything the vendor sends
/// in an unexpected type is treated as absent rather than failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub available: bool,
    #[serde(default, deserialize_with = "flag")]
    pub online: bool,
    #[serde(default, deserialize_with = "last_seen")]
    pub last_seen: Option<Value>,
    #[serde(default, deserialize_with = "devices")]
    pub devices: Vec<Device>,
}

impl Room {
    /// Reads a room out of any JSON value; non-objects become an empty room.
    pub fn from_value(value: &Value) -> Self {
        Room::deserialize(value).unwrap_or_default()
    }

    pub fn is_available(&self) -> bool {
        self.available || self.online
    }
}

/// Vendor identifier, which may arrive as a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn entity_id<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(Value::deserialize(deserializer)?).map(EntityId))
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(Value::deserialize(deserializer)?).filter(|s| !s.is_empty()))
}

/// Only a literal `true` sets a flag.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Keeps `lastSeen` verbatim unless it is falsy (null, false, 0 or "").
pub(crate) fn last_seen<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let falsy = match &value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    };

    Ok((!falsy).then_some(value))
}

fn devices<'de, D>(deserializer: D) -> Result<Vec<Device>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().map(Device::from_value).collect(),
        _ => Vec::new(),
    })
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reads_typical_room() {
        let room = Room::from_value(&json!({
            "id": 7,
            "name": "Board Room",
            "location": "Melbourne",
            "online": true,
            "devices": [{ "id": "d1", "online": false }]
        }));

        assert_eq!(room.id.as_ref().map(EntityId::as_str), Some("7"));
        assert_eq!(room.name.as_deref(), Some("Board Room"));
        assert!(room.is_available());
        assert_eq!(room.devices.len(), 1);
    }

    #[test]
    fn test_wrongly_typed_fields_are_absent() {
        let room = Room::from_value(&json!({
            "id": { "nested": true },
            "location": "",
            "available": "yes",
            "devices": "none",
            "lastSeen": 0
        }));

        assert!(room.id.is_none());
        assert!(room.location.is_none());
        assert!(!room.is_available());
        assert!(room.devices.is_empty());
        assert!(room.last_seen.is_none());
    }

    #[test]
    fn test_non_object_is_empty_room() {
        let room = Room::from_value(&json!("not a room"));
        assert!(room.id.is_none());
        assert!(room.devices.is_empty());
    }
}
