// SPDX-License-Identifier: MPL-2.0
//! Canvas viewport state management
//!
//! Pan, zoom and before/after comparison over the single active image.

use super::drag::DragState;
use super::zoom::{ZoomScale, ZoomState, ZoomStep};
use crate::domain::asset::AssetId;
use crate::domain::mode::Mode;
use crate::domain::ui::{Bounds, Point, SliderPercent};

/// Identity of the displayed image pair. View state belongs to one pair.
type ImageKey = (Option<AssetId>, Option<AssetId>);

/// Interaction state of the image canvas.
#[derive(Debug, Clone, Default)]
pub struct CanvasViewport {
    zoom: ZoomState,
    pan: Point,
    compare_enabled: bool,
    slider: SliderPercent,
    drag: DragState,
    image_key: ImageKey,
}

impl CanvasViewport {
    #[must_use]
    pub fn new(step: ZoomStep) -> Self {
        Self {
            zoom: ZoomState::new(step),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.zoom.scale()
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    #[must_use]
    pub fn compare_enabled(&self) -> bool {
        self.compare_enabled
    }

    #[must_use]
    pub fn slider(&self) -> SliderPercent {
        self.slider
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn zoom_in(&mut self) -> ZoomScale {
        self.zoom.zoom_in();
        self.settle()
    }

    pub fn zoom_out(&mut self) -> ZoomScale {
        self.zoom.zoom_out();
        self.settle()
    }

    pub fn zoom_by(&mut self, delta: f32) -> ZoomScale {
        self.zoom.zoom_by(delta);
        self.settle()
    }

    pub fn wheel(&mut self, delta_y: f32) -> ZoomScale {
        self.zoom.wheel(delta_y);
        self.settle()
    }

    /// Back at scale 1 the image is recentered and any pan drag ends.
    fn settle(&mut self) -> ZoomScale {
        let scale = self.zoom.scale();
        if scale.is_min() {
            self.pan = Point::ORIGIN;
            if self.drag.is_panning() {
                self.drag.stop();
            }
        }
        scale
    }

    pub fn reset_view(&mut self) {
        self.zoom.reset();
        self.pan = Point::ORIGIN;
        if self.drag.is_panning() {
            self.drag.stop();
        }
    }

    /// Moves the image by `delta`. Ignored at scale 1.
    pub fn pan_by(&mut self, delta: Point) -> bool {
        if !self.zoom.can_pan() {
            return false;
        }
        self.pan = self.pan + delta;
        true
    }

    /// Starts a drag. `on_handle` is true when the pointer went down on the
    /// compare slider handle, which only exists while comparing.
    pub fn pointer_down(&mut self, position: Point, on_handle: bool) {
        self.drag = if on_handle && self.compare_enabled {
            DragState::SliderDragging
        } else if self.zoom.can_pan() {
            DragState::Panning { last: position }
        } else {
            DragState::Idle
        };
    }

    /// Feeds a pointer move. `container` is the bounding box of the image
    /// wrapper, used to place the slider.
    pub fn pointer_move(&mut self, position: Point, container: Bounds) {
        match self.drag {
            DragState::Idle => {}
            DragState::Panning { .. } => {
                if let Some(delta) = self.drag.advance(position) {
                    self.pan = self.pan + delta;
                }
            }
            DragState::SliderDragging => {
                self.set_slider_from_pointer(position.x, container);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.stop();
    }

    /// Places the split at `pointer_x` within `container`, clamped so neither
    /// side collapses.
    pub fn set_slider_from_pointer(&mut self, pointer_x: f32, container: Bounds) {
        if let Some(percent) = container.horizontal_percent(pointer_x) {
            self.slider = SliderPercent::new(percent);
        }
    }

    pub fn set_slider(&mut self, percent: f32) {
        self.slider = SliderPercent::new(percent);
    }

    /// Comparison needs an original to compare against, distinct from what
    /// is shown, and only makes sense while editing.
    #[must_use]
    pub fn can_compare(current: Option<AssetId>, original: Option<AssetId>, mode: Mode) -> bool {
        match (current, original) {
            (Some(current), Some(original)) => mode == Mode::Edit && current != original,
            _ => false,
        }
    }

    /// Flips the comparison overlay. Returns the new state; always off when
    /// comparison is unavailable.
    pub fn toggle_compare(&mut self, available: bool) -> bool {
        self.compare_enabled = available && !self.compare_enabled;
        if !self.compare_enabled && self.drag.is_slider_dragging() {
            self.drag.stop();
        }
        self.compare_enabled
    }

    /// Resets zoom, pan and comparison when the displayed pair changes.
    /// Returns whether a reset happened.
    pub fn on_image_changed(&mut self, current: Option<AssetId>, original: Option<AssetId>) -> bool {
        let key = (current, original);
        if key == self.image_key {
            return false;
        }
        self.image_key = key;
        self.reset_view();
        self.compare_enabled = false;
        self.drag.stop();
        tracing::debug!(?current, ?original, "viewport reset for new image");
        true
    }
}
