// SPDX-License-Identifier: MPL-2.0
//! Encoded image handling.
//!
//! This module decodes, transforms and re-encodes the image bytes held by
//! assets, and writes them to disk.

pub mod data_url;
pub mod export;
pub mod image_transform;

// Re-export commonly used types
pub use export::{download_file_name, export_asset};
pub use image_transform::EncodedImage;
