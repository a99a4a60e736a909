use std::fmt::Display;

use ::common::api::HealthState;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

pub fn colorize(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

pub fn color_health_state(state: Option<&HealthState>, enabled: bool) -> String {
    let Some(state) = state else {
        return "-".to_string();
    };
    let label = state.as_str();
    match state {
        HealthState::Ok => colorize(label, "32", enabled),
        HealthState::Warning => colorize(label, "33", enabled),
        HealthState::Error => colorize(label, "31", enabled),
        _ => label.to_string(),
    }
}

pub fn format_optional_str(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// `Display` of an optional wire enum or number, `-` when absent.
pub fn format_optional<T: Display>(value: Option<&T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_bool(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "-".to_string(),
    }
}

pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_optional_uuid(value: Option<Uuid>) -> String {
    value
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Byte counts arrive as decimal strings; unparsable values pass through.
pub fn format_size(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(bytes) => format_bytes(bytes),
            Err(_) => v.to_string(),
        },
        _ => "-".to_string(),
    }
}

pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;

    if bytes >= GIB {
        format!("{:.1}Gi", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1}Mi", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1}Ki", bytes as f64 / KIB as f64)
    } else {
        format!("{}B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_states_are_coloured_only_when_enabled() {
        assert_eq!(
            color_health_state(Some(&HealthState::Error), true),
            "\x1b[31mError\x1b[0m"
        );
        assert_eq!(color_health_state(Some(&HealthState::Ok), false), "Ok");
        assert_eq!(color_health_state(None, true), "-");
        assert_eq!(
            color_health_state(Some(&HealthState::Unrecognized("Degraded".into())), true),
            "Degraded"
        );
    }

    #[test]
    fn sizes_render_in_binary_units() {
        assert_eq!(format_size(Some("512")), "512B");
        assert_eq!(format_size(Some("1536")), "1.5Ki");
        assert_eq!(format_size(Some("n/a")), "n/a");
        assert_eq!(format_size(None), "-");
    }
}
