use avmon_api::models::RoomStats;
use console::style;

pub fn room_stats_card(stats: Option<&RoomStats>, loading: bool, error: Option<&str>) -> String {
    if loading {
        return super::loading_card("Room Availability");
    }
    if error.is_some() {
        return format!(
            "{}\n  {}\n",
            style("Error Loading Stats").red().bold(),
            "Failed to fetch room statistics"
        );
    }
    let Some(stats) = stats else {
        return String::new();
    };

    format!(
        "{}\n  {} {}\n  {} available, {} unavailable of {} rooms\n",
        super::heading("Room Availability"),
        style(format!("{}%", stats.percentage)).bold(),
        style("available").dim(),
        style(stats.available).green(),
        style(stats.unavailable).red(),
        stats.total,
    )
}
