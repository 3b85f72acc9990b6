mod room_detail;
mod rooms_dashboard;
mod system_summary;

pub use room_detail::*;
pub use rooms_dashboard::*;
pub use system_summary::*;

use async_trait::async_trait;
use console::style;
use time::OffsetDateTime;

use crate::client::DashboardClient;

/// A screen that knows how to refresh its data and draw itself.
///
/// A failed refresh records the error and keeps whatever was loaded before.
#[async_trait]
pub trait View: Send + Sync {
    async fn refresh(&mut self, client: &DashboardClient);

    fn render(&self, now: OffsetDateTime) -> String;
}

pub(crate) fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(error) => format!("{} {}\n\n", style("Error:").red().bold(), error),
        None => String::new(),
    }
}
