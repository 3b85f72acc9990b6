use avmon_api::models::{Alert, Severity};
use console::style;
use time::OffsetDateTime;

use crate::time::format_relative;

pub fn alerts_card(alerts: &[Alert], loading: bool, now: OffsetDateTime) -> String {
    if loading {
        return super::loading_card("Alerts");
    }

    let mut out = format!(
        "{} {}\n",
        super::heading("Alerts"),
        style(format!("({})", alerts.len())).red().bold()
    );

    if alerts.is_empty() {
        out.push_str(&format!("  {}\n", style("No active alerts").green()));
        return out;
    }

    for alert in alerts {
        let marker = match alert.severity {
            Severity::High => style("●").red(),
            Severity::Medium => style("●").yellow(),
        };
        out.push_str(&format!(
            "  {} {} {}\n",
            marker,
            style(alert.kind).bold(),
            style(format_relative(Some(&alert.timestamp), now)).dim()
        ));

        let name = alert.name.as_deref().unwrap_or("Unknown Device");
        match &alert.location {
            Some(location) => out.push_str(&format!("    {name} in {location}\n")),
            None => out.push_str(&format!("    {name}\n")),
        }

        let tags: Vec<&str> = [alert.room_name.as_deref(), alert.device_type.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !tags.is_empty() {
            out.push_str(&format!("    [{}]\n", tags.join("] [")));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use avmon_api::models::AlertKind;
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_renders_device_alert() {
        let alert = Alert {
            id: "device-b".to_string(),
            kind: AlertKind::DeviceOffline,
            name: Some("Tap".to_string()),
            device_type: Some("Controller".to_string()),
            room_name: Some("Huddle 4".to_string()),
            location: Some("London".to_string()),
            timestamp: json!("2025-03-01T11:30:00Z"),
            severity: Severity::Medium,
        };

        let text = alerts_card(&[alert], false, datetime!(2025-03-01 12:00 UTC));
        let text = console::strip_ansi_codes(&text).to_string();

        assert!(text.contains("Alerts (1)"));
        assert!(text.contains("Device Offline 30 minutes ago"));
        assert!(text.contains("Tap in London"));
        assert!(text.contains("[Huddle 4] [Controller]"));
    }

    #[test]
    fn test_empty_and_loading() {
        let now = datetime!(2025-03-01 12:00 UTC);
        assert!(alerts_card(&[], false, now).contains("No active alerts"));
        assert!(alerts_card(&[], true, now).contains("Loading"));
    }
}
