//! Fixed-precision text formatting.
//!
//! Precision lives here and nowhere else: canonical values are stored
//! unrounded and formatted only when rendered.

use chrono::DateTime;

/// Dollar amount at the given precision (6 for per-session costs, 4 for the
/// history aggregate).
pub fn format_cost(value: f64, decimals: usize) -> String {
    format!("${:.prec$}", value, prec = decimals)
}

/// Seconds with a trailing unit, e.g. `14.62s`.
pub fn format_duration(value: f64, decimals: usize) -> String {
    format!("{:.prec$}s", value, prec = decimals)
}

/// Group digits with thousands separators, e.g. `5,230`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render an ISO 8601 timestamp as local-agnostic `YYYY-MM-DD HH:MM`,
/// falling back to the raw string when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Shortened session identifier for headers, e.g. `f3b9c2a1...`.
pub fn short_session_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        id.to_string()
    } else {
        let head: String = id.chars().take(8).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(0.0, 6), "$0.000000");
        assert_eq!(format_cost(0.000075, 6), "$0.000075");
        assert_eq!(format_cost(0.000712, 4), "$0.0007");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0, 1), "0.0s");
        assert_eq!(format_duration(14.617, 2), "14.62s");
        assert_eq!(format_duration(1.2041, 3), "1.204s");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1500), "1,500");
        assert_eq!(group_thousands(48120), "48,120");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2026-08-28T15:04:05Z"), "2026-08-28 15:04");
        assert_eq!(format_timestamp("not-a-timestamp"), "not-a-timestamp");
    }

    #[test]
    fn test_short_session_id() {
        assert_eq!(short_session_id("abc123"), "abc123");
        assert_eq!(short_session_id("f3b9c2a1-4d5e"), "f3b9c2a1...");
    }
}
