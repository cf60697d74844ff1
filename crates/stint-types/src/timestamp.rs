use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamp layout written to session logs: `2025-01-01 12:00:00 UTC`.
///
/// This is the second-precision `Display` form of `chrono::DateTime<Utc>`,
/// so logs written by older tool versions that formatted timestamps with
/// `{}` parse back unchanged.
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a session log timestamp field into a UTC point in time.
///
/// Returns `None` when the field does not match the log layout; the caller
/// decides whether that is an error (see `parser::session_start`).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let naive = value.strip_suffix(" UTC").unwrap_or(value);
    NaiveDateTime::parse_from_str(naive, NAIVE_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

/// Format a timestamp the way session log writers emit it.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    format!("{} UTC", ts.format(NAIVE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_log_timestamp() {
        let ts = parse_timestamp("2025-01-01 12:00:00 UTC").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_without_zone_suffix() {
        let ts = parse_timestamp("2025-01-01 12:00:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2025-13-40 99:00:00 UTC").is_none());
    }

    #[test]
    fn test_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 45).unwrap();
        let rendered = format_timestamp(ts);
        assert_eq!(rendered, "2024-06-15 08:30:45 UTC");
        assert_eq!(parse_timestamp(&rendered), Some(ts));
    }
}
