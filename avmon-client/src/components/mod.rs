//! Text renderings of the dashboard cards. Each takes already-fetched data.

mod alerts_card;
mod locations_list;
mod room_detail;
mod room_stats_card;
mod rooms_list;
mod stat_card;

pub use alerts_card::*;
pub use locations_list::*;
pub use room_detail::*;
pub use room_stats_card::*;
pub use rooms_list::*;
pub use stat_card::*;

use console::style;

pub(crate) fn heading(title: &str) -> String {
    style(title).bold().underlined().to_string()
}

pub fn loading_card(title: &str) -> String {
    format!("{}\n  {}\n", heading(title), style("Loading...").dim())
}
