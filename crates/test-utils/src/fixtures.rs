//! Common metadata fixtures for upload tests.

use serde_json::{json, Value};

/// Station used by the default fixtures.
pub const SAMPLE_STATION_ID: &str = "S1";

/// Complete, valid metadata for station S1.
pub const SAMPLE_METADATA_JSON: &str = r#"{"station_id":"S1","captured_at":"2024-01-15T10:00:00Z","location":"Loc","temperature":21.5,"humidity":40.0}"#;

/// Metadata missing every field except `station_id`.
pub const INCOMPLETE_METADATA_JSON: &str = r#"{"station_id":"S1"}"#;

/// Valid metadata as a JSON value.
pub fn sample_metadata() -> Value {
    json!({
        "station_id": SAMPLE_STATION_ID,
        "captured_at": "2024-01-15T10:00:00Z",
        "location": "Loc",
        "temperature": 21.5,
        "humidity": 40.0
    })
}

/// Valid metadata for an arbitrary station, serialized.
pub fn metadata_json_for(station_id: &str) -> String {
    let mut metadata = sample_metadata();
    metadata["station_id"] = Value::String(station_id.to_string());
    metadata.to_string()
}
