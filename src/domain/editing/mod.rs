// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! - [`AspectRatio`]: The five crop presets offered on the canvas
//! - [`CropRect`]: Centered crop geometry for a target ratio

pub mod aspect_ratio;

pub use aspect_ratio::{AspectRatio, CropRect};
