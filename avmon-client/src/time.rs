use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Reads a timestamp sent by the backend: RFC 3339 text or epoch milliseconds.
pub fn parse_timestamp(timestamp: &Value) -> Option<OffsetDateTime> {
    match timestamp {
        Value::String(s) => OffsetDateTime::parse(s, &Rfc3339).ok(),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
        }
        _ => None,
    }
}

/// Describes how long ago `timestamp` was, relative to `now`.
pub fn format_relative(timestamp: Option<&Value>, now: OffsetDateTime) -> String {
    let Some(timestamp) = timestamp.filter(|t| !t.is_null()) else {
        return "Just now".to_string();
    };
    let Some(at) = parse_timestamp(timestamp) else {
        return "More than a day ago".to_string();
    };

    let minutes = (now - at).whole_minutes();
    let hours = minutes.div_euclid(60);

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} minutes ago")
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else {
        "More than a day ago".to_string()
    }
}

/// Wall-clock time for the "last updated" line, in the local offset when it can be read.
pub fn format_clock(at: OffsetDateTime) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    at.to_offset(offset)
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| "-".to_string())
}
