// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains viewport value objects that are independent
//! of any presentation framework.

pub mod geometry;
pub mod newtypes;

pub use geometry::{Bounds, Point};
pub use newtypes::{SliderPercent, ZoomScale, ZoomStep};
