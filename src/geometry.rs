// SPDX-License-Identifier: MPL-2.0
//! Proportional icon measurements.
//!
//! Both the raster and the SVG output derive every position, radius and
//! stroke width from the icon side length using integer division, so the
//! two renderings line up pixel for pixel where they overlap.

use crate::error::{Error, Result};
use std::fmt;

/// Side length of a square icon, in pixels. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(u32);

impl IconSize {
    /// Wraps a side length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for zero.
    pub fn new(pixels: u32) -> Result<Self> {
        if pixels == 0 {
            return Err(Error::InvalidSize(pixels));
        }
        Ok(Self(pixels))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Integer pixel point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Every measurement needed to draw one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub center: i64,
    /// Outer disc radius: the disc fills the canvas with a 2 pixel inset.
    pub outer_radius: i64,
    pub outer_stroke: u32,
    pub inner_radius: i64,
    pub ring_width: u32,
    pub line_width: u32,
    /// Start of both cross lines along their axis.
    pub cross_start: i64,
    /// End of both cross lines along their axis.
    pub cross_end: i64,
    /// Glyph size for the raster output.
    pub font_size: u32,
    /// Glyph size written into the SVG template, not clamped.
    pub svg_font_size: u32,
    pub latin_anchor: Point,
    pub cjk_anchor: Point,
}

/// Minimum glyph size used by the raster output.
pub const MIN_FONT_SIZE: u32 = 8;

/// Gap between the disc and the canvas edge.
pub const OUTER_INSET: i64 = 2;

/// Offset of each glyph from the center, in opposite directions.
pub const GLYPH_OFFSET: i64 = 2;

impl IconGeometry {
    #[must_use]
    pub fn new(size: IconSize) -> Self {
        let side = size.get();
        let s = i64::from(side);
        let center = s / 2;

        Self {
            size: side,
            center,
            outer_radius: center - OUTER_INSET,
            outer_stroke: 1,
            inner_radius: s / 3,
            ring_width: (side / 16).max(1),
            line_width: (side / 20).max(1),
            cross_start: s / 4,
            cross_end: 3 * s / 4,
            font_size: (side / 8).max(MIN_FONT_SIZE),
            svg_font_size: side / 8,
            latin_anchor: Point {
                x: center - GLYPH_OFFSET,
                y: center - GLYPH_OFFSET,
            },
            cjk_anchor: Point {
                x: center + GLYPH_OFFSET,
                y: center + GLYPH_OFFSET,
            },
        }
    }

    /// Length of each cross line in the SVG path (`h`/`v` commands).
    #[must_use]
    pub fn cross_len(&self) -> i64 {
        i64::from(self.size) / 2
    }
}
