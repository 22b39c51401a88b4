//! Common types and utilities shared across the weather image services.

pub mod error;
pub mod record;
pub mod time;

pub use error::{FieldError, ValidationErrors, WeatherError, WeatherResult};
pub use record::{ImageAttributes, ProcessedRecord, WeatherObservation};
pub use time::{format_processed_at, PROCESSED_AT_FORMAT};
