// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rasterizer that plays back prepared glyphs.

use std::collections::BTreeMap;

use fontpack::{BitDepth, GlyphBitmap, GlyphMetrics, RasterError, RasterizedGlyph, Rasterizer};

/// Returns prepared glyphs by code point; every other code point is missing.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedRasterizer {
    glyphs: BTreeMap<u32, Result<RasterizedGlyph, RasterError>>,
    line_height: u16,
    /// Code points asked for, in order.
    pub(crate) requests: Vec<(u32, BitDepth)>,
}

impl ScriptedRasterizer {
    pub(crate) fn new(line_height: u16) -> Self {
        Self {
            line_height,
            ..Self::default()
        }
    }

    /// Adds a gray glyph of `width x height` intensities.
    pub(crate) fn gray(
        mut self,
        codepoint: u32,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        metrics: GlyphMetrics,
    ) -> Self {
        let bitmap = GlyphBitmap::gray(width, height, width as usize, pixels).unwrap();
        self.glyphs
            .insert(codepoint, Ok(RasterizedGlyph::new(bitmap, metrics)));
        self
    }

    /// Adds a glyph without pixels, like a space.
    pub(crate) fn blank(mut self, codepoint: u32, advance: i32) -> Self {
        let glyph = RasterizedGlyph::new(GlyphBitmap::empty(), GlyphMetrics::new(advance, 0, 0));
        self.glyphs.insert(codepoint, Ok(glyph));
        self
    }

    /// Makes `codepoint` fail with `error`.
    pub(crate) fn failing(mut self, codepoint: u32, error: RasterError) -> Self {
        self.glyphs.insert(codepoint, Err(error));
        self
    }
}

impl Rasterizer for ScriptedRasterizer {
    fn rasterize(
        &mut self,
        codepoint: u32,
        depth: BitDepth,
    ) -> Result<RasterizedGlyph, RasterError> {
        self.requests.push((codepoint, depth));
        self.glyphs
            .get(&codepoint)
            .cloned()
            .unwrap_or(Err(RasterError::MissingGlyph))
    }

    fn line_height(&self) -> u16 {
        self.line_height
    }
}
