// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic, including:
//! - Step zoom (buttons and keyboard)
//! - Continuous zoom from wheel events
//! - Zoom step configuration

// Re-export zoom constants from centralized config
pub use crate::config::{
    DEFAULT_ZOOM_SCALE, DEFAULT_ZOOM_STEP, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, WHEEL_ZOOM_STEP,
};
pub use crate::domain::ui::{ZoomScale, ZoomStep};

/// Manages the canvas scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    scale: ZoomScale,
    step: ZoomStep,
}

impl ZoomState {
    #[must_use]
    pub fn new(step: ZoomStep) -> Self {
        Self {
            scale: ZoomScale::default(),
            step,
        }
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    #[must_use]
    pub fn step(&self) -> ZoomStep {
        self.step
    }

    /// Applies zoom in by one step
    pub fn zoom_in(&mut self) -> ZoomScale {
        self.zoom_by(self.step.value())
    }

    /// Applies zoom out by one step
    pub fn zoom_out(&mut self) -> ZoomScale {
        self.zoom_by(-self.step.value())
    }

    /// Applies a signed scale delta through the clamp.
    pub fn zoom_by(&mut self, delta: f32) -> ZoomScale {
        self.scale = self.scale.offset(delta);
        self.scale
    }

    /// Maps a wheel event to a fixed step. Scrolling up (negative `delta_y`)
    /// zooms in. A zero delta leaves the scale alone.
    pub fn wheel(&mut self, delta_y: f32) -> ZoomScale {
        if delta_y < 0.0 {
            self.zoom_by(WHEEL_ZOOM_STEP)
        } else if delta_y > 0.0 {
            self.zoom_by(-WHEEL_ZOOM_STEP)
        } else {
            self.scale
        }
    }

    /// Resets zoom to the fitted scale
    pub fn reset(&mut self) {
        self.scale = ZoomScale::default();
    }

    /// Panning is only meaningful once the image is larger than the canvas.
    #[must_use]
    pub fn can_pan(&self) -> bool {
        !self.scale.is_min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_zoom_state_is_fitted() {
        let state = ZoomState::default();
        assert_abs_diff_eq!(state.scale().value(), DEFAULT_ZOOM_SCALE);
        assert_abs_diff_eq!(state.step().value(), DEFAULT_ZOOM_STEP);
        assert!(!state.can_pan());
    }

    #[test]
    fn zoom_in_out_work_correctly() {
        let mut state = ZoomState::default();

        state.zoom_in();
        assert_abs_diff_eq!(state.scale().value(), 1.5);
        assert!(state.can_pan());

        state.zoom_out();
        assert_abs_diff_eq!(state.scale().value(), 1.0);
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut state = ZoomState::default();
        for _ in 0..40 {
            state.zoom_in();
        }
        assert_abs_diff_eq!(state.scale().value(), MAX_ZOOM_SCALE);

        for _ in 0..40 {
            state.zoom_out();
        }
        assert_abs_diff_eq!(state.scale().value(), MIN_ZOOM_SCALE);

        state.zoom_by(f32::INFINITY);
        assert_abs_diff_eq!(state.scale().value(), MAX_ZOOM_SCALE);
    }

    #[test]
    fn wheel_uses_fixed_step_by_direction() {
        let mut state = ZoomState::default();
        state.wheel(-120.0);
        assert_abs_diff_eq!(state.scale().value(), 1.2, epsilon = 1e-6);
        state.wheel(-3.0);
        assert_abs_diff_eq!(state.scale().value(), 1.4, epsilon = 1e-6);
        state.wheel(0.0);
        assert_abs_diff_eq!(state.scale().value(), 1.4, epsilon = 1e-6);
        state.wheel(500.0);
        assert_abs_diff_eq!(state.scale().value(), 1.2, epsilon = 1e-6);
    }

    #[test]
    fn custom_step_is_used() {
        let mut state = ZoomState::new(ZoomStep::new(1.0));
        state.zoom_in();
        assert_abs_diff_eq!(state.scale().value(), 2.0);
        state.reset();
        assert!(state.scale().is_min());
    }
}
