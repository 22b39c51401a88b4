//! Weather observation and processed record definitions.

use serde::{Deserialize, Serialize};

/// Dimensions and container format read from an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageAttributes {
    pub width: u32,
    pub height: u32,
    /// Canonical upper-case container name, e.g. "PNG" or "JPEG"
    pub format: String,
}

impl ImageAttributes {
    pub fn new(width: u32, height: u32, format: impl Into<String>) -> Self {
        Self {
            width,
            height,
            format: format.into(),
        }
    }
}

/// Validated sensor metadata supplied alongside an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub station_id: String,
    /// Caller-supplied capture time, kept verbatim
    pub captured_at: String,
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// The persisted unit: an observation enriched with image attributes.
///
/// Field order matches the stored JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub station_id: String,
    pub captured_at: String,
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub image: ImageAttributes,
    /// UTC processing time, `YYYY-MM-DDTHH:MM:SSZ`
    pub processed_at: String,
}

impl ProcessedRecord {
    /// Recover the observation part of the record.
    pub fn observation(&self) -> WeatherObservation {
        WeatherObservation {
            station_id: self.station_id.clone(),
            captured_at: self.captured_at.clone(),
            location: self.location.clone(),
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProcessedRecord {
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
    fn test_record_json_layout() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"station_id":"S1","captured_at":"2024-01-15T10:00:00Z","location":"Loc","temperature":21.5,"humidity":40.0,"image":{"width":100,"height":50,"format":"PNG"},"processed_at":"2024-01-15T10:30:00Z"}"#
        );
    }

    #[test]
    fn test_record_parses_stored_json() {
        let stored = r#"{"station_id":"S1","captured_at":"2024-01-15T10:00:00Z","location":"Loc","temperature":21.5,"humidity":40.0,"image":{"width":100,"height":50,"format":"PNG"},"processed_at":"2024-01-15T10:30:00Z"}"#;
        let record: ProcessedRecord = serde_json::from_str(stored).unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn test_observation_projection() {
        let obs = sample().observation();
        assert_eq!(obs.station_id, "S1");
        assert_eq!(obs.humidity, 40.0);
    }
}
