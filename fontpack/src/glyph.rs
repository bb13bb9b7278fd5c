// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metadata.

use crate::{BitDepth, GlyphBitmap};

/// Placement metrics reported by a rasterizer, in whole pixels.
///
/// Bearings follow the usual font convention: `top` grows upwards from the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    /// Horizontal pen advance after drawing the glyph.
    pub advance: i32,
    /// Distance from the pen position to the left edge of the bitmap.
    pub left: i32,
    /// Distance from the baseline up to the top edge of the bitmap.
    pub top: i32,
}

impl GlyphMetrics {
    /// Creates new metrics.
    pub const fn new(advance: i32, left: i32, top: i32) -> Self {
        Self { advance, left, top }
    }
}

/// A glyph bitmap together with its metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterizedGlyph {
    /// The rendered pixels.
    pub bitmap: GlyphBitmap,
    /// Placement of the bitmap relative to the pen.
    pub metrics: GlyphMetrics,
}

impl RasterizedGlyph {
    /// Creates a glyph from a bitmap and its metrics.
    pub const fn new(bitmap: GlyphBitmap, metrics: GlyphMetrics) -> Self {
        Self { bitmap, metrics }
    }
}

/// Fixed-size description of one glyph in a packed font.
///
/// `y_offset` is measured downwards from the baseline to the top row of the glyph, so it
/// is negative for glyphs rising above the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphRecord {
    /// Byte offset of the glyph's first sample in the bitstream.
    pub offset: u32,
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Horizontal pen advance.
    pub x_advance: i16,
    /// Horizontal offset from the pen to the left edge.
    pub x_offset: i16,
    /// Vertical offset from the baseline to the top edge, growing downwards.
    pub y_offset: i16,
}

impl GlyphRecord {
    /// Returns the number of pixels in the glyph.
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the number of bytes the glyph occupies when packed at `depth`.
    pub const fn packed_len(&self, depth: BitDepth) -> usize {
        depth.packed_len(self.pixel_count())
    }

    /// Returns the byte just past the glyph's packed pixels.
    pub const fn end(&self, depth: BitDepth) -> usize {
        self.offset as usize + self.packed_len(depth)
    }
}
