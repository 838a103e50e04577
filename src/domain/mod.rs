// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core state and business rules.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here performs I/O; identifiers and timestamps come from `uuid`
//! and `chrono`.
//!
//! # Modules
//!
//! - [`asset`]: Image assets and the [`AssetStore`](asset::AssetStore) history
//! - [`editing`]: Crop geometry ([`AspectRatio`](editing::AspectRatio),
//!   [`CropRect`](editing::CropRect))
//! - [`mode`]: Edit or create workspace [`Mode`](mode::Mode)
//! - [`prompt`]: Prompt text helpers and style presets
//! - [`template`]: Reusable prompt templates
//! - [`ui`]: Viewport value objects ([`ZoomScale`](ui::ZoomScale),
//!   [`SliderPercent`](ui::SliderPercent), [`Point`](ui::Point))

pub mod asset;
pub mod editing;
pub mod mode;
pub mod prompt;
pub mod template;
pub mod ui;
