use chrono::{DateTime, Utc};

/// Whole-second elapsed time decomposed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Decompose a whole-second count. Negative inputs (clock skew, a log
    /// written in the future) clamp to zero rather than rendering signs.
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn since(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_seconds(now.signed_duration_since(start).num_seconds())
    }
}

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render(total_seconds: i64) -> String {
        Elapsed::from_seconds(total_seconds).to_string()
    }

    #[test]
    fn test_format_zero() {
        insta::assert_snapshot!(render(0), @"00:00:00");
    }

    #[test]
    fn test_format_under_a_minute() {
        insta::assert_snapshot!(render(59), @"00:00:59");
    }

    #[test]
    fn test_format_hour_minute_second() {
        insta::assert_snapshot!(render(3661), @"01:01:01");
    }

    #[test]
    fn test_format_past_a_day_keeps_counting_hours() {
        insta::assert_snapshot!(render(100 * 3600 + 62), @"100:01:02");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        insta::assert_snapshot!(render(-5), @"00:00:00");
    }

    #[test]
    fn test_since() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 13, 30, 15).unwrap();
        assert_eq!(Elapsed::since(start, now).to_string(), "01:30:15");
    }
}
