//! Image header inspection.
//!
//! Identifies the container from its magic bytes and reads the
//! dimensions from the header, without decoding pixel data.

use std::io::Cursor;

use image::{io::Reader as ImageReader, ImageFormat};
use weather_common::ImageAttributes;

use crate::error::ImageDecodeError;

/// Read width, height and format from encoded image bytes.
///
/// The format comes from the bytes themselves, never from a filename or
/// declared content type.
pub fn inspect_image(bytes: &[u8]) -> Result<ImageAttributes, ImageDecodeError> {
    if bytes.is_empty() {
        return Err(ImageDecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format().ok_or(ImageDecodeError::UnrecognizedFormat)?;
    let label = format_label(format);

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| ImageDecodeError::Header {
            format: label.clone(),
            message: e.to_string(),
        })?;

    if width == 0 || height == 0 {
        return Err(ImageDecodeError::ZeroSized { width, height });
    }

    Ok(ImageAttributes::new(width, height, label))
}

/// Canonical upper-case label for a container format.
pub fn format_label(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Ico => "ICO".to_string(),
        ImageFormat::Pnm => "PNM".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}
