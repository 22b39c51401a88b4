//! Storage key derivation for processed records.

use std::fmt;

use uuid::Uuid;
use weather_common::ProcessedRecord;

/// Namespace shared by every record key.
pub const RECORD_KEY_PREFIX: &str = "weather_entry";

/// Scan pattern matching every record key.
pub const RECORD_SCAN_PATTERN: &str = "weather_entry:*";

/// Derives the key a record is stored under.
///
/// Every strategy must produce keys matched by [`RECORD_SCAN_PATTERN`].
pub trait KeyStrategy: Send + Sync + fmt::Debug {
    fn record_key(&self, record: &ProcessedRecord) -> String;
}

/// `weather_entry:{station_id}:{processed_at}`.
///
/// Two uploads from one station within the same second share a key and
/// the later write replaces the earlier one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StationTimestampKeys;

impl KeyStrategy for StationTimestampKeys {
    fn record_key(&self, record: &ProcessedRecord) -> String {
        format!(
            "{}:{}:{}",
            RECORD_KEY_PREFIX, record.station_id, record.processed_at
        )
    }
}

/// `weather_entry:{station_id}:{processed_at}:{uuid}`, one key per upload.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueSuffixKeys;

impl KeyStrategy for UniqueSuffixKeys {
    fn record_key(&self, record: &ProcessedRecord) -> String {
        format!(
            "{}:{}",
            StationTimestampKeys.record_key(record),
            Uuid::new_v4().simple()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::glob_match;
    use weather_common::ImageAttributes;

    fn record() -> ProcessedRecord {
        ProcessedRecord {
            station_id: "S1".to_string(),
            captured_at: "2024-01-15T10:00:00Z".to_string(),
            location: "Loc".to_string(),
            temperature: 21.5,
            humidity: 40.0,
            image: ImageAttributes::new(100, 50, "PNG"),
            processed_at: "2024-01-15T10:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_station_timestamp_key() {
        assert_eq!(
            StationTimestampKeys.record_key(&record()),
            "weather_entry:S1:2024-01-15T10:30:00Z"
        );
    }

    #[test]
    fn test_station_timestamp_key_collides_within_second() {
        let a = StationTimestampKeys.record_key(&record());
        let b = StationTimestampKeys.record_key(&record());
        assert_eq!(a, b);
    }

    #[test]
    fn test_unique_suffix_keys_differ() {
        let a = UniqueSuffixKeys.record_key(&record());
        let b = UniqueSuffixKeys.record_key(&record());

        assert_ne!(a, b);
        assert!(a.starts_with("weather_entry:S1:2024-01-15T10:30:00Z:"));
    }

    #[test]
    fn test_keys_match_scan_pattern() {
        assert!(glob_match(RECORD_SCAN_PATTERN, &StationTimestampKeys.record_key(&record())));
        assert!(glob_match(RECORD_SCAN_PATTERN, &UniqueSuffixKeys.record_key(&record())));
    }
}
