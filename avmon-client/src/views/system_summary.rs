use async_trait::async_trait;
use avmon_api::models::{Alert, DeviceStats, LocationSummary, RoomStats};
use time::OffsetDateTime;

use super::{View, error_banner};
use crate::client::DashboardClient;
use crate::components::{StatCard, TrendColor, alerts_card, loading_card, locations_list};

pub const SUMMARY_ALERT_LIMIT: usize = 3;

/// Device and room totals, the newest alerts and the per-location breakdown.
#[derive(Debug, Default)]
pub struct SystemSummary {
    pub device_stats: Option<DeviceStats>,
    pub room_stats: Option<RoomStats>,
    pub alerts: Vec<Alert>,
    pub locations: Vec<LocationSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SystemSummary {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl View for SystemSummary {
    async fn refresh(&mut self, client: &DashboardClient) {
        let result = tokio::try_join!(
            client.get_device_stats(),
            client.get_room_stats(),
            client.get_all_alerts(),
            client.get_all_locations(),
        );

        match result {
            Ok((devices, rooms, alerts, locations)) => {
                self.device_stats = Some(devices.data);
                self.room_stats = Some(rooms.data);
                self.alerts = alerts.data.into_iter().take(SUMMARY_ALERT_LIMIT).collect();
                self.locations = locations.data;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching dashboard data: {}", e);
                self.error = Some("Failed to load dashboard data".to_string());
            }
        }
        self.loading = false;
    }

    fn render(&self, now: OffsetDateTime) -> String {
        let mut out = error_banner(self.error.as_deref());

        let devices = self.device_stats.unwrap_or_default();
        let rooms = self.room_stats.unwrap_or_default();
        let cards = [
            StatCard {
                title: "Devices Online",
                subtitle: format!("{}% of devices are online.", devices.percentage),
                trend: format!("↑ {}% vs last month", devices.change_vs_last_month),
                trend_color: TrendColor::Green,
                value: devices.online,
                total: devices.total,
                percentage: devices.percentage,
                label: "devices online",
            },
            StatCard {
                title: "Meeting Room Availability",
                subtitle: format!("{}% of rooms available.", rooms.percentage),
                trend: format!("↑ {}% vs last month", rooms.change_vs_last_month),
                trend_color: TrendColor::Green,
                value: rooms.available,
                total: rooms.total,
                percentage: rooms.percentage,
                label: "rooms available",
            },
        ];

        for card in &cards {
            if self.loading {
                out.push_str(&loading_card(card.title));
            } else {
                out.push_str(&card.render());
            }
            out.push('\n');
        }

        out.push_str(&alerts_card(&self.alerts, self.loading, now));
        out.push('\n');
        out.push_str(&locations_list(&self.locations, self.loading));

        out
    }
}
