//! Error types for the ingestion crate.

use thiserror::Error;
use weather_common::WeatherError;

/// Reasons uploaded bytes could not be read as an image.
#[derive(Error, Debug)]
pub enum ImageDecodeError {
    #[error("image data is empty")]
    Empty,

    #[error("cannot identify image file")]
    UnrecognizedFormat,

    #[error("failed to read image data: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to read {format} header: {message}")]
    Header { format: String, message: String },

    #[error("image has no pixels ({width}x{height})")]
    ZeroSized { width: u32, height: u32 },
}

impl From<ImageDecodeError> for WeatherError {
    fn from(err: ImageDecodeError) -> Self {
        WeatherError::ImageDecode(err.to_string())
    }
}
