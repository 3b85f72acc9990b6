use std::time::Duration;

use avmon_client::cli::{Cli, Commands};
use avmon_client::client::DashboardClient;
use avmon_client::poller::Poller;
use avmon_client::views::{RoomDetail, RoomsDashboard, SystemSummary, View};
use clap::Parser;
use console::Term;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            format!("{app_name}=warn").into()
        }))
        .init();

    let client = DashboardClient::new(&cli.base_url, Duration::from_secs(cli.timeout))?;
    let mut view: Box<dyn View> = match cli.command.unwrap_or(Commands::Summary) {
        Commands::Summary => Box::new(SystemSummary::new()),
        Commands::Rooms => Box::new(RoomsDashboard::new()),
        Commands::Room { id } => Box::new(RoomDetail::new(id)),
    };

    let term = Term::stdout();

    if cli.once {
        view.refresh(&client).await;
        term.write_str(&view.render(OffsetDateTime::now_utc()))?;
        return Ok(());
    }

    let mut poller = Poller::start(client, view, Duration::from_secs(cli.interval.max(1)));

    loop {
        tokio::select! {
            frame = poller.next_frame() => {
                let Some(frame) = frame else { break };
                term.clear_screen()?;
                term.write_str(&frame)?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
