// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the canvas interaction state separated from the
//! controller, following the principle of separation of concerns.

pub mod drag;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use viewport::CanvasViewport;
pub use zoom::ZoomState;
