use avmon_api::models::LocationSummary;
use console::style;

const FLAGS: [(&str, &str); 7] = [
    ("America", "🇺🇸"),
    ("India", "🇮🇳"),
    ("United Kingdom", "🇬🇧"),
    ("Australia", "🇦🇺"),
    ("Canada", "🇨🇦"),
    ("Melbourne", "🇦🇺"),
    ("AUS", "🇦🇺"),
];

/// Flag for the first known place the location name mentions, a globe otherwise.
pub fn location_flag(location: &str) -> &'static str {
    let location = location.to_lowercase();

    FLAGS
        .iter()
        .find(|(key, _)| location.contains(&key.to_lowercase()))
        .map(|(_, flag)| *flag)
        .unwrap_or("🌍")
}

pub fn locations_list(locations: &[LocationSummary], loading: bool) -> String {
    if loading {
        return super::loading_card("Locations");
    }

    let mut out = format!("{}\n", super::heading("Locations"));

    if locations.is_empty() {
        out.push_str(&format!("  {}\n", style("No locations reported").dim()));
        return out;
    }

    for location in locations {
        out.push_str(&format!(
            "  {} {:<24} {} of {} devices online, {} of {} rooms available\n",
            location_flag(&location.name),
            location.name,
            location.online_devices,
            location.total_devices,
            location.available_rooms,
            location.total_rooms,
        ));
    }

    out
}
