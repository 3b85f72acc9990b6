use avmon_api::models::DeviceEntry;
use serde_json::{Map, Value};

/// Lists the devices of every room, tagging each with its room's identity.
///
/// Device records pass through untouched apart from the room fields, which win
/// over any device field of the same name.
pub fn device_entries(rooms: &[Value]) -> Vec<DeviceEntry> {
    let mut entries = Vec::new();

    for room in rooms {
        let Some(devices) = room.get("devices").and_then(Value::as_array) else {
            continue;
        };

        let room_name = present(room.get("name"));
        let room_id = present(room.get("id"));
        let location = present(room.get("location"));

        for device in devices {
            let mut fields = match device {
                Value::Object(map) => map.clone(),
                _ => Map::new(),
            };
            for key in ["roomName", "roomId", "location"] {
                fields.remove(key);
            }

            entries.push(DeviceEntry {
                device: fields,
                room_name: room_name.clone(),
                room_id: room_id.clone(),
                location: location.clone(),
            });
        }
    }

    entries
}

fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}
