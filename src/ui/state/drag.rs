// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles the pointer-drag interaction over the canvas: either panning the
//! zoomed image or moving the compare slider handle, never both.

use crate::domain::ui::Point;

/// Which drag, if any, the pointer is performing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Panning the image. `last` is the pointer position of the previous
    /// move event; pan grows by the delta from it.
    Panning { last: Point },
    /// Dragging the compare slider handle.
    SliderDragging,
}

impl DragState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, DragState::Panning { .. })
    }

    #[must_use]
    pub fn is_slider_dragging(&self) -> bool {
        matches!(self, DragState::SliderDragging)
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        *self = DragState::Idle;
    }

    /// Records `position` as the new reference point while panning and
    /// returns the movement since the previous one.
    pub fn advance(&mut self, position: Point) -> Option<Point> {
        match self {
            DragState::Panning { last } => {
                let delta = position - *last;
                *last = position;
                Some(delta)
            }
            _ => None,
        }
    }
}
