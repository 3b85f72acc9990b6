use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::client::DashboardClient;
use crate::views::View;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Refreshes a view on a fixed interval and publishes each rendered frame.
///
/// The first refresh happens immediately. Dropping the poller stops the timer.
pub struct Poller {
    frames: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl Poller {
    pub fn start(client: DashboardClient, mut view: Box<dyn View>, period: Duration) -> Self {
        let (tx, rx) = watch::channel(view.render(OffsetDateTime::now_utc()));

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                view.refresh(&client).await;

                if tx.send(view.render(OffsetDateTime::now_utc())).is_err() {
                    tracing::debug!("Frame receiver dropped, stopping poller");
                    break;
                }
            }
        });

        Self { frames: rx, task }
    }

    /// Waits for the next frame after the last one seen.
    pub async fn next_frame(&mut self) -> Option<String> {
        self.frames.changed().await.ok()?;
        Some(self.frames.borrow_and_update().clone())
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
