use async_trait::async_trait;
use avmon_api::models::RoomStats;
use console::style;
use serde_json::Value;
use time::OffsetDateTime;

use super::{View, error_banner};
use crate::client::DashboardClient;
use crate::components::{room_stats_card, rooms_list};
use crate::time::format_clock;

#[derive(Debug, Default)]
pub struct RoomsDashboard {
    pub rooms: Vec<Value>,
    pub stats: Option<RoomStats>,
    pub last_updated: Option<OffsetDateTime>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RoomsDashboard {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl View for RoomsDashboard {
    async fn refresh(&mut self, client: &DashboardClient) {
        match tokio::try_join!(client.get_all_rooms(), client.get_room_stats()) {
            Ok((rooms, stats)) => {
                self.rooms = rooms.data;
                self.stats = Some(stats.data);
                self.last_updated = Some(OffsetDateTime::now_utc());
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching rooms: {}", e);
                self.error = Some("Failed to fetch room data".to_string());
            }
        }
        self.loading = false;
    }

    fn render(&self, _now: OffsetDateTime) -> String {
        let mut out = error_banner(self.error.as_deref());

        out.push_str(&room_stats_card(
            self.stats.as_ref(),
            self.loading,
            self.error.as_deref().filter(|_| self.stats.is_none()),
        ));
        out.push('\n');
        out.push_str(&rooms_list(&self.rooms, self.loading));

        if let Some(at) = self.last_updated {
            out.push_str(&format!("\n{}\n", style(format!("Last updated: {}", format_clock(at))).dim()));
        }

        out
    }
}
