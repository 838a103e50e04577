// SPDX-License-Identifier: MPL-2.0
//! Crop presets and centered crop geometry.

use std::fmt;
use std::str::FromStr;

/// Crop aspect ratio presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Square,    // 1:1
    Landscape, // 16:9
    Portrait,  // 9:16
    Standard,  // 4:3
    Classic,   // 3:2
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Standard,
        AspectRatio::Classic,
    ];

    /// Short identifier, e.g. `16:9`. Also used in the derived asset label.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Classic => "3:2",
        }
    }

    /// Menu label, e.g. `Landscape (16:9)`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "Square (1:1)",
            AspectRatio::Landscape => "Landscape (16:9)",
            AspectRatio::Portrait => "Portrait (9:16)",
            AspectRatio::Standard => "Standard (4:3)",
            AspectRatio::Classic => "Classic (3:2)",
        }
    }

    /// Width divided by height.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Landscape => 16.0 / 9.0,
            AspectRatio::Portrait => 9.0 / 16.0,
            AspectRatio::Standard => 4.0 / 3.0,
            AspectRatio::Classic => 3.0 / 2.0,
        }
    }

    /// Label given to the asset a crop produces.
    #[must_use]
    pub fn crop_label(self) -> String {
        format!("Crop {}", self.id())
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.id() == wanted)
            .ok_or_else(|| format!("unsupported aspect ratio '{wanted}' (use 1:1, 16:9, 9:16, 4:3 or 3:2)"))
    }
}

/// Crop rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Largest rectangle of the given width/height `ratio`, centered in the source.
    ///
    /// A source wider than the target keeps its full height and is trimmed
    /// equally left and right; otherwise it keeps its full width and is
    /// trimmed equally top and bottom.
    ///
    /// Returns `None` for an empty source or a ratio that is not a positive
    /// finite number.
    #[must_use]
    pub fn centered(source_width: u32, source_height: u32, ratio: f64) -> Option<Self> {
        if source_width == 0 || source_height == 0 || !ratio.is_finite() || ratio <= 0.0 {
            return None;
        }

        let src_w = f64::from(source_width);
        let src_h = f64::from(source_height);

        if src_w / src_h > ratio {
            let width = to_pixels(src_h * ratio, source_width);
            Some(Self {
                x: (source_width - width) / 2,
                y: 0,
                width,
                height: source_height,
            })
        } else {
            let height = to_pixels(src_w / ratio, source_height);
            Some(Self {
                x: 0,
                y: (source_height - height) / 2,
                width: source_width,
                height,
            })
        }
    }

    /// Width divided by height of this rectangle.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Rounds a fractional extent to whole pixels within `1..=limit`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(extent: f64, limit: u32) -> u32 {
    (extent.round() as u32).clamp(1, limit)
}
