use std::collections::HashMap;

use avmon_api::models::LocationSummary;

use crate::models::Room;

const UNKNOWN_LOCATION: &str = "Unknown";

/// Groups rooms by their raw location string, in the order locations first appear.
pub fn locations(rooms: &[Room]) -> Vec<LocationSummary> {
    let mut summaries: Vec<LocationSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for room in rooms {
        let name = room.location.as_deref().unwrap_or(UNKNOWN_LOCATION);
        let slot = *index.entry(name).or_insert_with(|| {
            summaries.push(LocationSummary::new(name));
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.total_rooms += 1;
        summary.available_rooms += usize::from(room.is_available());
        summary.total_devices += room.devices.len();
        summary.online_devices += room.devices.iter().filter(|d| d.online).count();
    }

    summaries
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::services::inventory::normalize;

    #[test]
    fn test_groups_by_raw_location() {
        let rooms = normalize::rooms(&json!([
            { "location": "Melbourne", "available": true, "devices": [{ "online": true }, {}] },
            { "location": "London" },
            { "location": "melbourne", "online": true },
            { "location": "Melbourne", "devices": [{ "online": true }] },
            {}
        ]));

        let summaries = locations(&rooms);
        let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Melbourne", "London", "melbourne", "Unknown"]);

        assert_eq!(
            summaries[0],
            LocationSummary {
                name: "Melbourne".to_string(),
                total_rooms: 2,
                available_rooms: 1,
                total_devices: 3,
                online_devices: 2,
            }
        );
    }

    #[test]
    fn test_room_totals_are_preserved() {
        let rooms = normalize::rooms(&json!([
            { "location": "A" }, { "location": "B" }, { "location": "A" }, 7, { "location": "" }
        ]));

        let total: usize = locations(&rooms).iter().map(|s| s.total_rooms).sum();
        assert_eq!(total, rooms.len());
    }

    #[test]
    fn test_no_rooms() {
        assert!(locations(&[]).is_empty());
    }
}
