// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Canvas scale bounds and steps
//! - **Compare**: Split slider bounds
//! - **Templates**: Storage key and preview encoding
//! - **Generation**: Remote model names and endpoint

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale when an image is first shown (1.0 = fit).
pub const DEFAULT_ZOOM_SCALE: f32 = 1.0;

/// Minimum canvas scale. Pan is only possible above this value.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum canvas scale.
pub const MAX_ZOOM_SCALE: f32 = 8.0;

/// Scale change applied by the zoom in/out buttons.
pub const DEFAULT_ZOOM_STEP: f32 = 0.5;

/// Smallest configurable zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.1;

/// Largest configurable zoom step.
pub const MAX_ZOOM_STEP: f32 = 2.0;

/// Scale change applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.2;

// ==========================================================================
// Compare Slider Defaults
// ==========================================================================

/// Initial split position of the compare slider (percent).
pub const DEFAULT_SLIDER_PERCENT: f32 = 50.0;

/// Lowest split position; keeps the original half from collapsing.
pub const MIN_SLIDER_PERCENT: f32 = 0.1;

/// Highest split position; keeps the current half from collapsing.
pub const MAX_SLIDER_PERCENT: f32 = 99.9;

// ==========================================================================
// Template Defaults
// ==========================================================================

/// Key of the single persisted template entry.
pub const TEMPLATE_STORAGE_KEY: &str = "nano-banana-prompts";

/// Total bytes the template store may hold, mirroring a browser's local
/// storage allowance.
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Template previews wider than this are downscaled before storage.
pub const PREVIEW_MAX_WIDTH: u32 = 400;

/// JPEG quality of stored template previews.
pub const PREVIEW_JPEG_QUALITY: u8 = 70;

/// JPEG quality of camera captures.
pub const CAMERA_JPEG_QUALITY: u8 = 90;

// ==========================================================================
// Generation Defaults
// ==========================================================================

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for image edits and text-to-image.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Model used to rewrite prompts.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the generative language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(MAX_ZOOM_SCALE > MIN_ZOOM_SCALE);
    assert!(DEFAULT_ZOOM_SCALE >= MIN_ZOOM_SCALE);
    assert!(DEFAULT_ZOOM_SCALE <= MAX_ZOOM_SCALE);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    assert!(WHEEL_ZOOM_STEP > 0.0);

    assert!(MIN_SLIDER_PERCENT > 0.0);
    assert!(MAX_SLIDER_PERCENT < 100.0);
    assert!(DEFAULT_SLIDER_PERCENT > MIN_SLIDER_PERCENT);
    assert!(DEFAULT_SLIDER_PERCENT < MAX_SLIDER_PERCENT);

    assert!(DEFAULT_STORAGE_QUOTA_BYTES > 0);
    assert!(PREVIEW_MAX_WIDTH > 0);
    assert!(PREVIEW_JPEG_QUALITY > 0 && PREVIEW_JPEG_QUALITY <= 100);
    assert!(CAMERA_JPEG_QUALITY > 0 && CAMERA_JPEG_QUALITY <= 100);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_ZOOM_SCALE, 1.0);
        assert!(MIN_ZOOM_SCALE <= DEFAULT_ZOOM_SCALE);
        assert!(MAX_ZOOM_SCALE > DEFAULT_ZOOM_SCALE);
    }

    #[test]
    fn zoom_step_defaults_are_valid() {
        assert_eq!(DEFAULT_ZOOM_STEP, 0.5);
        assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
        assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    }

    #[test]
    fn slider_defaults_are_centered() {
        assert_eq!(DEFAULT_SLIDER_PERCENT, 50.0);
        assert_eq!(MIN_SLIDER_PERCENT, 0.1);
        assert_eq!(MAX_SLIDER_PERCENT, 99.9);
    }
}
