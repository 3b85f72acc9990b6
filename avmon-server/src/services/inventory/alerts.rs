use avmon_api::models::{Alert, AlertKind, Severity};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::models::{EntityId, Room};

/// Alerts for every offline room and device, regenerated from scratch on each call.
///
/// A room alert is followed by the alerts of that room's devices. Entities without a
/// `lastSeen` value are stamped with `now`.
pub fn alerts(rooms: &[Room], now: OffsetDateTime) -> Vec<Alert> {
    let now = Value::String(now.format(&Rfc3339).unwrap_or_else(|_| now.to_string()));
    let mut alerts = Vec::new();

    for room in rooms {
        if !room.is_available() {
            alerts.push(Alert {
                id: alert_id("room", room.id.as_ref()),
                kind: AlertKind::RoomOffline,
                name: room.name.clone(),
                device_type: None,
                room_name: None,
                location: room.location.clone(),
                timestamp: room.last_seen.clone().unwrap_or_else(|| now.clone()),
                severity: Severity::High,
            });
        }

        for device in room.devices.iter().filter(|device| !device.online) {
            alerts.push(Alert {
                id: alert_id("device", device.id.as_ref()),
                kind: AlertKind::DeviceOffline,
                name: device.name.clone(),
                device_type: device.device_type.clone(),
                room_name: room.name.clone(),
                location: room.location.clone(),
                timestamp: device.last_seen.clone().unwrap_or_else(|| now.clone()),
                severity: Severity::Medium,
            });
        }
    }

    alerts
}

fn alert_id(prefix: &str, id: Option<&EntityId>) -> String {
    match id {
        Some(id) => format!("{prefix}-{id}"),
        None => format!("{prefix}-unknown"),
    }
}
