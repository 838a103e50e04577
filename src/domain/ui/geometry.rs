// SPDX-License-Identifier: MPL-2.0
//! Pointer and container geometry in screen pixels.

use std::ops::{Add, Sub};

/// A position or displacement in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Bounding box of the image container, as reported by the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal position of `pointer_x` inside the box, in percent.
    ///
    /// Positions left or right of the box clamp to 0 or 100. A zero-width box
    /// has no meaningful split and yields `None`.
    #[must_use]
    pub fn horizontal_percent(&self, pointer_x: f32) -> Option<f32> {
        if self.width.is_nan() || self.width <= 0.0 {
            return None;
        }
        let offset = (pointer_x - self.x).clamp(0.0, self.width);
        Some(offset / self.width * 100.0)
    }
}
