//! Error types for the weather image services.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type alias using WeatherError.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Primary error type for upload and query operations.
#[derive(Debug, Error)]
pub enum WeatherError {
    // === Client Errors ===
    #[error("Malformed metadata: {0}")]
    MalformedInput(String),

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(ValidationErrors),

    #[error("Error processing image: {0}")]
    ImageDecode(String),

    // === Server Errors ===
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl WeatherError {
    /// Whether the caller's input caused this error.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            WeatherError::MalformedInput(_)
                | WeatherError::InvalidMetadata(_)
                | WeatherError::ImageDecode(_)
        )
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        if self.is_client_fault() {
            400
        } else {
            500
        }
    }
}

impl From<ValidationErrors> for WeatherError {
    fn from(errors: ValidationErrors) -> Self {
        WeatherError::InvalidMetadata(errors)
    }
}

/// A single rejected metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found while validating one metadata mapping.
///
/// Never empty when returned from validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Check whether any error refers to the named field.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_fault_status_codes() {
        assert_eq!(WeatherError::MalformedInput("x".into()).http_status_code(), 400);
        assert_eq!(WeatherError::ImageDecode("x".into()).http_status_code(), 400);
        let invalid = WeatherError::from(ValidationErrors::from(FieldError::new("humidity", "field required")));
        assert_eq!(invalid.http_status_code(), 400);
        assert!(invalid.is_client_fault());
    }

    #[test]
    fn test_server_fault_status_codes() {
        assert_eq!(WeatherError::StoreError("down".into()).http_status_code(), 500);
        assert_eq!(WeatherError::Internal("boom".into()).http_status_code(), 500);
        assert!(!WeatherError::Internal("boom".into()).is_client_fault());
    }

    #[test]
    fn test_validation_errors_display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("location", "field required"));
        errors.push(FieldError::new("temperature", "value is not a valid number"));

        assert_eq!(
            errors.to_string(),
            "location: field required; temperature: value is not a valid number"
        );
        assert!(errors.has_field("temperature"));
        assert!(!errors.has_field("humidity"));
    }
}
