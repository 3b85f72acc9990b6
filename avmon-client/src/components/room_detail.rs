use console::style;
use serde_json::Value;

pub fn room_detail(room_id: &str, info: Option<&Value>, activity: Option<&Value>, loading: bool) -> String {
    let title = format!("Room {room_id}");
    if loading {
        return super::loading_card(&title);
    }

    let pretty = |value: Option<&Value>| {
        value
            .and_then(|v| serde_json::to_string_pretty(v).ok())
            .unwrap_or_else(|| "-".to_string())
    };

    format!(
        "{}\n{}\n{}\n{}\n{}\n",
        super::heading(&title),
        style("Details").bold(),
        pretty(info),
        style("Activity").bold(),
        pretty(activity),
    )
}
