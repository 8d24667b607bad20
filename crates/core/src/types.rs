//! Core data types for the data toolkit.

use chrono::{DateTime, Utc};
use std::fmt;

/// Timestamp in milliseconds since Unix epoch (UTC).
pub type TimestampMs = i64;

/// ISO-8601 UTC format with microsecond precision and a trailing `Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Prefix used when a stamp is rendered without configuration.
pub const DEFAULT_PREFIX: &str = "Ran at";

/// Format a UTC instant as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
#[inline]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// A single execution record of the automation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStamp {
    /// When the task ran.
    pub ran_at: DateTime<Utc>,
}

impl RunStamp {
    /// Create a stamp for the given instant.
    pub fn new(ran_at: DateTime<Utc>) -> Self {
        Self { ran_at }
    }

    /// Milliseconds since epoch.
    #[inline]
    pub fn ts_ms(&self) -> TimestampMs {
        self.ran_at.timestamp_millis()
    }

    /// Render the newline-terminated line written to the output file.
    pub fn line(&self) -> String {
        self.line_with_prefix(DEFAULT_PREFIX)
    }

    /// Same as [`RunStamp::line`] with a custom prefix.
    pub fn line_with_prefix(&self, prefix: &str) -> String {
        format!("{} {}\n", prefix, format_timestamp(&self.ran_at))
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", DEFAULT_PREFIX, format_timestamp(&self.ran_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap()
            + chrono::Duration::microseconds(123_456)
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&fixed()), "2024-03-05T07:08:09.123456Z");
    }

    #[test]
    fn test_format_whole_second_keeps_fraction() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-01T00:00:00.000000Z");
    }

    #[test]
    fn test_stamp_line() {
        let stamp = RunStamp::new(fixed());
        assert_eq!(stamp.line(), "Ran at 2024-03-05T07:08:09.123456Z\n");
        assert_eq!(stamp.to_string(), "Ran at 2024-03-05T07:08:09.123456Z");
    }

    #[test]
    fn test_stamp_custom_prefix() {
        let stamp = RunStamp::new(fixed());
        assert_eq!(
            stamp.line_with_prefix("Finished"),
            "Finished 2024-03-05T07:08:09.123456Z\n"
        );
    }

    #[test]
    fn test_ts_ms() {
        let stamp = RunStamp::new(fixed());
        assert_eq!(stamp.ts_ms() % 1000, 123);
    }
}
