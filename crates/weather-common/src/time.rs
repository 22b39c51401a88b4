//! Timestamp rendering for processed records.

use chrono::{DateTime, Utc};

/// `processed_at` layout: extended ISO-8601, whole seconds, literal `Z`.
pub const PROCESSED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render an instant as a `processed_at` timestamp.
///
/// Sub-second precision is dropped, never rounded.
pub fn format_processed_at(now: DateTime<Utc>) -> String {
    now.format(PROCESSED_AT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_whole_seconds() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_processed_at(t), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_format_truncates_fraction() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 59).unwrap()
            + chrono::Duration::milliseconds(999);
        assert_eq!(format_processed_at(t), "2024-01-15T10:30:59Z");
    }

    #[test]
    fn test_format_pads_fields() {
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(format_processed_at(t), "2024-03-05T07:08:09Z");
    }
}
