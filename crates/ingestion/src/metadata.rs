//! Validation of caller-supplied station metadata.
//!
//! Turns an untyped JSON mapping into a [`WeatherObservation`], collecting
//! every field error instead of stopping at the first one.

use serde_json::{Map, Value};
use weather_common::{FieldError, ValidationErrors, WeatherObservation};

/// Field name used for errors about the mapping as a whole.
pub const ROOT_FIELD: &str = "__root__";

/// Validate raw metadata into a typed observation.
///
/// All five fields are required. Extra keys are ignored. Numeric fields
/// accept JSON numbers or numeric strings; anything else is rejected.
pub fn validate_metadata(raw: &Value) -> Result<WeatherObservation, ValidationErrors> {
    let Some(map) = raw.as_object() else {
        return Err(FieldError::new(ROOT_FIELD, "metadata must be a JSON object").into());
    };

    let mut errors = ValidationErrors::new();

    let station_id = required_string(map, "station_id", &mut errors);
    let captured_at = required_string(map, "captured_at", &mut errors);
    let location = required_string(map, "location", &mut errors);
    let temperature = required_number(map, "temperature", &mut errors);
    let humidity = required_number(map, "humidity", &mut errors);

    if station_id.as_deref() == Some("") {
        errors.push(FieldError::new("station_id", "must not be empty"));
    }

    match (station_id, captured_at, location, temperature, humidity) {
        (Some(station_id), Some(captured_at), Some(location), Some(temperature), Some(humidity))
            if errors.is_empty() =>
        {
            Ok(WeatherObservation {
                station_id,
                captured_at,
                location,
                temperature,
                humidity,
            })
        }
        _ => Err(errors),
    }
}

fn required_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match map.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "value is not a valid string"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "field required"));
            None
        }
    }
}

fn required_number(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let parsed = match map.get(field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
        None => {
            errors.push(FieldError::new(field, "field required"));
            return None;
        }
    };

    // Non-finite values cannot be written back out as JSON numbers
    match parsed.filter(|v| v.is_finite()) {
        Some(v) => Some(v),
        None => {
            errors.push(FieldError::new(field, "value is not a valid number"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const REQUIRED: [&str; 5] = ["station_id", "captured_at", "location", "temperature", "humidity"];

    fn valid() -> Value {
        json!({
            "station_id": "S1",
            "captured_at": "2024-01-15T10:00:00Z",
            "location": "Loc",
            "temperature": 21.5,
            "humidity": 40.0
        })
    }

    #[test]
    fn test_valid_metadata_round_trips() {
        let obs = validate_metadata(&valid()).unwrap();
        assert_eq!(obs.station_id, "S1");
        assert_eq!(obs.captured_at, "2024-01-15T10:00:00Z");
        assert_eq!(obs.location, "Loc");
        assert_eq!(obs.temperature, 21.5);
        assert_eq!(obs.humidity, 40.0);
    }

    #[test]
    fn test_each_missing_field_rejected() {
        for field in REQUIRED {
            let mut raw = valid();
            raw.as_object_mut().unwrap().remove(field);

            let errors = validate_metadata(&raw).unwrap_err();
            assert_eq!(errors.len(), 1, "field {}", field);
            assert!(errors.has_field(field), "field {}", field);
        }
    }

    #[test]
    fn test_errors_are_aggregated() {
        let errors = validate_metadata(&json!({"station_id": "S1"})).unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in &REQUIRED[1..] {
            assert!(errors.has_field(field));
        }
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mut raw = valid();
        raw["wind_speed"] = json!(3.2);
        assert!(validate_metadata(&raw).is_ok());
    }

    #[test]
    fn test_integer_and_numeric_strings_coerced() {
        let mut raw = valid();
        raw["temperature"] = json!(21);
        raw["humidity"] = json!(" 40.5 ");

        let obs = validate_metadata(&raw).unwrap();
        assert_eq!(obs.temperature, 21.0);
        assert_eq!(obs.humidity, 40.5);
    }

    #[test]
    fn test_wrong_types_rejected() {
        let mut raw = valid();
        raw["temperature"] = json!("warm");
        raw["humidity"] = json!(true);
        raw["location"] = json!(42);
        raw["captured_at"] = Value::Null;

        let errors = validate_metadata(&raw).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.has_field("temperature"));
        assert!(errors.has_field("humidity"));
        assert!(errors.has_field("location"));
        assert!(errors.has_field("captured_at"));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let mut raw = valid();
        raw["temperature"] = json!("NaN");
        raw["humidity"] = json!("inf");

        let errors = validate_metadata(&raw).unwrap_err();
        assert!(errors.has_field("temperature"));
        assert!(errors.has_field("humidity"));
    }

    #[test]
    fn test_empty_station_id_rejected() {
        let mut raw = valid();
        raw["station_id"] = json!("");

        let errors = validate_metadata(&raw).unwrap_err();
        assert_eq!(errors.errors(), &[FieldError::new("station_id", "must not be empty")]);
    }

    #[test]
    fn test_captured_at_not_format_checked() {
        let mut raw = valid();
        raw["captured_at"] = json!("yesterday afternoon");
        assert_eq!(validate_metadata(&raw).unwrap().captured_at, "yesterday afternoon");
    }

    #[test]
    fn test_non_object_rejected() {
        for raw in [json!([1, 2]), json!("S1"), json!(null)] {
            let errors = validate_metadata(&raw).unwrap_err();
            assert!(errors.has_field(ROOT_FIELD));
        }
    }
}
