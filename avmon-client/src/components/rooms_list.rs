use console::style;
use serde_json::Value;

fn field<'a>(room: &'a Value, key: &str) -> Option<&'a Value> {
    room.get(key).filter(|v| !v.is_null())
}

fn display(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

pub fn rooms_list(rooms: &[Value], loading: bool) -> String {
    if loading {
        return super::loading_card("Rooms");
    }

    let mut out = format!("{} {}\n", super::heading("Rooms"), style(format!("({})", rooms.len())).dim());

    if rooms.is_empty() {
        out.push_str(&format!("  {}\n", style("No rooms found").dim()));
        return out;
    }

    for room in rooms {
        let up = [field(room, "available"), field(room, "online")]
            .into_iter()
            .any(|flag| flag == Some(&Value::Bool(true)));
        let status = if up {
            style("Available").green()
        } else {
            style("Unavailable").red()
        };
        let devices = field(room, "devices").and_then(Value::as_array).map_or(0, Vec::len);

        out.push_str(&format!(
            "  {:<10} {:<28} {:<20} {} ({} devices)\n",
            display(field(room, "id")),
            display(field(room, "name")),
            display(field(room, "location")),
            status,
            devices,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_renders_rooms() {
        let rooms = [
            json!({ "id": 1, "name": "Board Room", "location": "Perth", "online": true, "devices": [{}, {}] }),
            json!({ "id": "r2", "name": "Huddle" }),
        ];

        let text = console::strip_ansi_codes(&rooms_list(&rooms, false)).to_string();
        assert!(text.contains("Rooms (2)"));
        assert!(text.contains("Available (2 devices)"));
        assert!(text.contains("Unavailable (0 devices)"));
        assert!(text.contains("r2"));
    }
}
