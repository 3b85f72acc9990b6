use avmon_api::models::{DeviceStats, RoomStats};

use crate::models::Room;

/// No history is kept, so the trend shown on the dashboard cards is fixed.
pub const CHANGE_VS_LAST_MONTH: i32 = 2;

/// Whole-number share of `part` in `whole`; zero when there is nothing to count.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }

    let ratio = part.min(whole) as f64 / whole as f64;
    (ratio * 100.0).round() as u8
}

pub fn room_stats(rooms: &[Room]) -> RoomStats {
    let total = rooms.len();
    let available = rooms.iter().filter(|room| room.is_available()).count();

    RoomStats {
        total,
        available,
        unavailable: total - available,
        percentage: percentage(available, total),
        change_vs_last_month: CHANGE_VS_LAST_MONTH,
    }
}

pub fn device_stats(rooms: &[Room]) -> DeviceStats {
    let (total, online) = rooms
        .iter()
        .flat_map(|room| room.devices.iter())
        .fold((0, 0), |(total, online), device| {
            (total + 1, online + usize::from(device.online))
        });

    DeviceStats {
        total,
        online,
        offline: total - online,
        percentage: percentage(online, total),
        change_vs_last_month: CHANGE_VS_LAST_MONTH,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::services::inventory::normalize;

    #[test]
    fn test_percentage_zero_guard() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(3, 3), 100);
    }

    #[test]
    fn test_percentage_is_bounded() {
        for whole in 0..50 {
            for part in 0..=whole {
                assert!(percentage(part, whole) <= 100);
            }
        }
    }

    #[test]
    fn test_mixed_rooms() {
        let rooms = normalize::rooms(&json!([
            { "id": 1, "available": true, "devices": [{ "id": "a", "online": true }] },
            { "id": 2, "available": false, "devices": [{ "id": "b", "online": false }] }
        ]));

        assert_eq!(
            room_stats(&rooms),
            RoomStats {
                total: 2,
                available: 1,
                unavailable: 1,
                percentage: 50,
                change_vs_last_month: CHANGE_VS_LAST_MONTH,
            }
        );
        assert_eq!(
            device_stats(&rooms),
            DeviceStats {
                total: 2,
                online: 1,
                offline: 1,
                percentage: 50,
                change_vs_last_month: CHANGE_VS_LAST_MONTH,
            }
        );
    }

    #[test]
    fn test_online_counts_as_available() {
        let rooms = normalize::rooms(&json!({ "rooms": [{ "online": true }, {}] }));
        let stats = room_stats(&rooms);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.percentage, 50);
    }

    #[test]
    fn test_empty_inventory() {
        let stats = device_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage, 0);
        assert_eq!(room_stats(&[]).percentage, 0);
    }
}
