//! Weather image ingestion library.
//!
//! Turns an uploaded image plus its sensor metadata into a persisted
//! [`ProcessedRecord`](weather_common::ProcessedRecord), and reads the
//! stored records back.
//!
//! # Architecture
//!
//! The upload pipeline runs, failing fast at each step:
//!
//! - Metadata validation (`station_id`, `captured_at`, `location`,
//!   `temperature`, `humidity`)
//! - Image header inspection (width, height, container format)
//! - Record assembly with a UTC processing timestamp
//! - One write to the injected [`RecordStore`](storage::RecordStore)
//!
//! Client-fault errors from the first two steps keep their detail; every
//! later failure is flattened to an internal error.

pub mod assembler;
pub mod error;
pub mod inspect;
pub mod keys;
pub mod metadata;
mod service;

// Re-exports
pub use assembler::assemble_record;
pub use error::ImageDecodeError;
pub use inspect::{format_label, inspect_image};
pub use keys::{KeyStrategy, StationTimestampKeys, UniqueSuffixKeys, RECORD_KEY_PREFIX, RECORD_SCAN_PATTERN};
pub use metadata::validate_metadata;
pub use service::{QueryService, UploadService};
