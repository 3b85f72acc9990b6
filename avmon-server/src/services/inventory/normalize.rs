use serde_json::Value;

use crate::models::Room;

/// Wrapper keys the vendor has been seen to put the room list under, by priority.
const ROOM_KEYS: [&str; 2] = ["essentialRooms", "rooms"];

/// Finds the room list in a vendor payload.
///
/// A wrapper key whose value is not an array is skipped. A payload that matches
/// none of the known shapes yields no rooms.
pub fn room_values(payload: &Value) -> &[Value] {
    ROOM_KEYS
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_array))
        .or_else(|| payload.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn rooms(payload: &Value) -> Vec<Room> {
    room_values(payload).iter().map(Room::from_value).collect()
}
