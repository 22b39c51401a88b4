//! Shared test utilities for the weather image workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Metadata fixtures matching the upload contract
//! - Encoded image generators (PNG, JPEG, GIF, BMP)
//! - Multipart request body builders
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{png_bytes, MultipartBody, SAMPLE_METADATA_JSON};
//! ```

pub mod fixtures;
pub mod generators;
pub mod multipart;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use multipart::*;
