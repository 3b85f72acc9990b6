use clap::{Parser, Subcommand};

use crate::client::DEFAULT_BASE_URL;
use crate::poller::DEFAULT_POLL_INTERVAL;

#[derive(Parser, Debug)]
#[command(name = "avmon", version, about = "Terminal dashboard for AV room monitoring")]
pub struct Cli {
    /// Dashboard backend API root
    #[arg(long, env = "AVMON_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds between refreshes
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    pub interval: u64,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Fetch and print a single frame, then exit
    #[arg(long)]
    pub once: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Devices, rooms, recent alerts and locations
    Summary,
    /// Room list with availability
    Rooms,
    /// Details and activity for one room
    Room {
        /// Room id as reported by the backend
        id: String,
    },
}
