use crate::timestamp::parse_timestamp;
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Find the timestamp of the first `Start` event in a session log.
///
/// The log is scanned line by line in file order; each line is split on
/// `,` and the second field compared against the literal `Start`
/// (case-sensitive, no trimming). The scan stops at the first match, so a
/// log recording a paused-and-resumed session reports the *first* start
/// in the file, not the most recent one. That matches what the log
/// writers have always displayed and callers rely on it.
///
/// Returns:
/// - `Ok(Some(ts))` for the first matching line;
/// - `Ok(None)` for an empty log or one with no `Start` line, a normal
///   outcome for a session that has not begun;
/// - `Err(Error::Timestamp)` when a `Start` line carries a timestamp that
///   does not parse. Lines without a second field are skipped, as are
///   `Start` labels in any other position.
pub fn session_start(log: &str) -> Result<Option<DateTime<Utc>>> {
    for (idx, line) in log.split('\n').enumerate() {
        let mut fields = line.splitn(3, ',');
        let ts_field = fields.next().unwrap_or_default();

        if fields.next() != Some("Start") {
            continue;
        }

        let timestamp = parse_timestamp(ts_field).ok_or_else(|| Error::Timestamp {
            value: ts_field.to_string(),
            line: idx + 1,
        })?;
        return Ok(Some(timestamp));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_single_start_line() {
        let log = "2025-01-01 12:00:00 UTC,Start\n";
        assert_eq!(session_start(log).unwrap(), Some(at(12, 0)));
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(session_start("").unwrap(), None);
    }

    #[test]
    fn test_no_start_event() {
        let log = "2025-01-01 12:00:00 UTC,Pause\n2025-01-01 12:30:00 UTC,Stop\n";
        assert_eq!(session_start(log).unwrap(), None);
    }

    // Paused-and-resumed sessions have more than one Start line. The
    // parser deliberately reports the first one in the file; a caller
    // wanting "time since resume" would need different semantics.
    #[test]
    fn test_resumed_session_reports_first_start() {
        let log = "2025-01-01 12:00:00 UTC,Start\n\
                   2025-01-01 12:30:00 UTC,Pause\n\
                   2025-01-01 13:00:00 UTC,Start\n";
        assert_eq!(session_start(log).unwrap(), Some(at(12, 0)));
    }

    #[test]
    fn test_named_session_third_field_ignored() {
        let log = "2025-01-01 12:00:00 UTC,Start,my-session\n";
        assert_eq!(session_start(log).unwrap(), Some(at(12, 0)));
    }

    #[test]
    fn test_line_without_comma_is_skipped() {
        let log = "garbage line\n2025-01-01 12:00:00 UTC,Start\n";
        assert_eq!(session_start(log).unwrap(), Some(at(12, 0)));
    }

    #[test]
    fn test_match_is_case_sensitive_and_untrimmed() {
        let log = "2025-01-01 12:00:00 UTC,start\n2025-01-01 12:01:00 UTC, Start\n";
        assert_eq!(session_start(log).unwrap(), None);
    }

    #[test]
    fn test_bad_timestamp_on_start_line_is_an_error() {
        let log = "2025-01-01 12:00:00 UTC,Pause\nnot-a-date,Start\n";
        let err = session_start(log).unwrap_err();
        assert!(matches!(err, Error::Timestamp { line: 2, .. }));
    }

    #[test]
    fn test_bad_timestamp_on_non_start_line_is_ignored() {
        let log = "not-a-date,Pause\n2025-01-01 12:00:00 UTC,Start\n";
        assert_eq!(session_start(log).unwrap(), Some(at(12, 0)));
    }

    #[test]
    fn test_first_field_alone_is_not_a_match() {
        // A bare "Start" line has no second field and must be skipped.
        let log = "Start\n";
        assert_eq!(session_start(log).unwrap(), None);
    }
}
