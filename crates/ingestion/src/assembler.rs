//! Record assembly.

use chrono::{DateTime, Utc};
use weather_common::{format_processed_at, ImageAttributes, ProcessedRecord, WeatherObservation};

/// Combine an observation and its image attributes into a record
/// processed at `now`.
pub fn assemble_record(
    observation: WeatherObservation,
    image: ImageAttributes,
    now: DateTime<Utc>,
) -> ProcessedRecord {
    ProcessedRecord {
        station_id: observation.station_id,
        captured_at: observation.captured_at,
        location: observation.location,
        temperature: observation.temperature,
        humidity: observation.humidity,
        image,
        processed_at: format_processed_at(now),
    }
}
