use async_trait::async_trait;
use serde_json::Value;
use time::OffsetDateTime;

use super::{View, error_banner};
use crate::client::DashboardClient;
use crate::components::room_detail;

pub struct RoomDetail {
    pub room_id: String,
    pub info: Option<Value>,
    pub activity: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RoomDetail {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            info: None,
            activity: None,
            loading: true,
            error: None,
        }
    }
}

#[async_trait]
impl View for RoomDetail {
    async fn refresh(&mut self, client: &DashboardClient) {
        let result = tokio::try_join!(
            client.get_room_by_id(&self.room_id),
            client.get_room_activity(&self.room_id),
        );

        match result {
            Ok((info, activity)) => {
                self.info = Some(info.data);
                self.activity = Some(activity.data);
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching room {}: {}", self.room_id, e);
                self.error = Some(format!("Failed to fetch room {}", self.room_id));
            }
        }
        self.loading = false;
    }

    fn render(&self, _now: OffsetDateTime) -> String {
        let mut out = error_banner(self.error.as_deref());
        out.push_str(&room_detail(
            &self.room_id,
            self.info.as_ref(),
            self.activity.as_ref(),
            self.loading,
        ));
        out
    }
}
