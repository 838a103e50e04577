// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for viewport values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_SLIDER_PERCENT, DEFAULT_ZOOM_SCALE, DEFAULT_ZOOM_STEP, MAX_SLIDER_PERCENT,
    MAX_ZOOM_SCALE, MAX_ZOOM_STEP, MIN_SLIDER_PERCENT, MIN_ZOOM_SCALE, MIN_ZOOM_STEP,
};

// =============================================================================
// ZoomScale
// =============================================================================

/// Canvas scale factor, guaranteed to be within valid range (1.0–8.0).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    /// NaN collapses to the minimum.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self(MIN_ZOOM_SCALE);
        }
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scale as a whole percentage, e.g. 1.5 → 150.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    /// Whether the image is fully zoomed out. Pan is disabled here.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }

    /// Applies a signed delta through the clamp.
    #[must_use]
    pub fn offset(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_SCALE)
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Scale change per zoom button press, within 0.1–2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_nan() {
            return Self::default();
        }
        Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}

// =============================================================================
// SliderPercent
// =============================================================================

/// Compare slider split position, guaranteed to be within 0.1–99.9 %.
///
/// The bounds keep either half of the comparison from collapsing entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPercent(f32);

impl SliderPercent {
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_SLIDER_PERCENT, MAX_SLIDER_PERCENT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SliderPercent {
    fn default() -> Self {
        Self(DEFAULT_SLIDER_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_scale_clamps_to_valid_range() {
        assert_abs_diff_eq!(ZoomScale::new(0.2).value(), MIN_ZOOM_SCALE);
        assert_abs_diff_eq!(ZoomScale::new(12.0).value(), MAX_ZOOM_SCALE);
        assert_abs_diff_eq!(ZoomScale::new(2.5).value(), 2.5);
        assert_abs_diff_eq!(ZoomScale::new(f32::NAN).value(), MIN_ZOOM_SCALE);
    }

    #[test]
    fn zoom_scale_offset_goes_through_clamp() {
        let scale = ZoomScale::new(7.8).offset(0.5);
        assert!(scale.is_max());
        let scale = ZoomScale::new(1.1).offset(-0.5);
        assert!(scale.is_min());
    }

    #[test]
    fn zoom_scale_percent_display() {
        assert_eq!(ZoomScale::new(1.5).as_percent(), 150);
        assert_eq!(ZoomScale::default().as_percent(), 100);
    }

    #[test]
    fn zoom_step_clamps() {
        assert_abs_diff_eq!(ZoomStep::new(0.0).value(), MIN_ZOOM_STEP);
        assert_abs_diff_eq!(ZoomStep::new(10.0).value(), MAX_ZOOM_STEP);
        assert_abs_diff_eq!(ZoomStep::default().value(), 0.5);
    }

    #[test]
    fn slider_percent_clamps() {
        assert_abs_diff_eq!(SliderPercent::new(0.0).value(), 0.1);
        assert_abs_diff_eq!(SliderPercent::new(100.0).value(), 99.9);
        assert_abs_diff_eq!(SliderPercent::new(-20.0).value(), 0.1);
        assert_abs_diff_eq!(SliderPercent::new(42.0).value(), 42.0);
        assert_abs_diff_eq!(SliderPercent::default().value(), 50.0);
    }
}
