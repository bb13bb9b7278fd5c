// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rendering with Swash.

use std::fs;
use std::path::{Path, PathBuf};

use fontpack::{
    BitDepth, GlyphBitmap, GlyphMetrics, RasterError, RasterizedGlyph, Rasterizer,
};
use swash::scale::image::{Content, Image};
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;
use swash::{FontRef, GlyphId};

use crate::Error;

/// Coverage at or above which a pixel is set when rendering for 1 bit per pixel.
const MONO_THRESHOLD: u8 = 0x80;

/// A font file loaded into memory.
#[derive(Debug)]
pub struct FontFile {
    path: PathBuf,
    data: Vec<u8>,
    index: u32,
}

impl FontFile {
    /// Reads a font file and checks that it contains face `index`.
    pub fn open(path: &Path, index: u32) -> Result<Self, Error> {
        let data = fs::read(path).map_err(|err| Error::io(path, err))?;
        let font = Self {
            path: path.to_owned(),
            data,
            index,
        };
        font.face()?;
        Ok(font)
    }

    /// Returns the selected face.
    pub fn face(&self) -> Result<FontRef<'_>, Error> {
        FontRef::from_index(&self.data, self.index as usize).ok_or_else(|| Error::FontLoad {
            path: self.path.clone(),
            index: self.index,
        })
    }
}

/// Renders glyphs of one face at a fixed size.
///
/// Embedded bitmap strikes matching the size are preferred over outlines. At 1 bit per
/// pixel the anti-aliased coverage is thresholded into a monochrome bitmap.
pub struct SwashRasterizer<'a> {
    font: FontRef<'a>,
    context: ScaleContext,
    size: f32,
    hint: bool,
    line_height: u16,
}

impl<'a> SwashRasterizer<'a> {
    /// Creates a rasterizer for `font` at `size` pixels per em, with hinting enabled.
    pub fn new(font: FontRef<'a>, size: f32) -> Self {
        let metrics = font.metrics(&[]).scale(size);
        let line_height = to_pixels(metrics.ascent + metrics.descent.abs() + metrics.leading);
        Self {
            font,
            context: ScaleContext::new(),
            size,
            hint: true,
            line_height: u16::try_from(line_height.max(0)).unwrap_or(u16::MAX),
        }
    }

    /// Sets whether outlines are hinted.
    pub fn hint(mut self, hint: bool) -> Self {
        self.hint = hint;
        self
    }

    fn render(&mut self, glyph_id: GlyphId) -> Result<Option<Image>, RasterError> {
        let mut scaler = self
            .context
            .builder(self.font)
            .size(self.size)
            .hint(self.hint)
            .build();
        let image = Render::new(&[Source::Bitmap(StrikeWith::ExactSize), Source::Outline])
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id);
        if image.is_some() {
            return Ok(image);
        }
        // Blank glyphs such as the space have an outline without any points.
        match scaler.scale_outline(glyph_id) {
            Some(outline) if outline.points().is_empty() => Ok(None),
            _ => Err(RasterError::Render),
        }
    }
}

impl std::fmt::Debug for SwashRasterizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwashRasterizer")
            .field("size", &self.size)
            .field("hint", &self.hint)
            .field("line_height", &self.line_height)
            .finish_non_exhaustive()
    }
}

impl Rasterizer for SwashRasterizer<'_> {
    fn rasterize(
        &mut self,
        codepoint: u32,
        depth: BitDepth,
    ) -> Result<RasterizedGlyph, RasterError> {
        let ch = char::from_u32(codepoint).ok_or(RasterError::MissingGlyph)?;
        let glyph_id = self.font.charmap().map(ch);
        if glyph_id == 0 {
            return Err(RasterError::MissingGlyph);
        }
        let advance = self
            .font
            .glyph_metrics(&[])
            .scale(self.size)
            .advance_width(glyph_id);
        let advance = to_pixels(advance);

        let Some(image) = self.render(glyph_id)? else {
            return Ok(RasterizedGlyph::new(
                GlyphBitmap::empty(),
                GlyphMetrics::new(advance, 0, 0),
            ));
        };
        if image.content != Content::Mask {
            return Err(RasterError::Unsupported);
        }
        let placement = image.placement;
        let mut bitmap = GlyphBitmap::gray(
            placement.width,
            placement.height,
            placement.width as usize,
            image.data,
        )?;
        if depth == BitDepth::One {
            bitmap = bitmap.threshold(MONO_THRESHOLD);
        }
        Ok(RasterizedGlyph::new(
            bitmap,
            GlyphMetrics::new(advance, placement.left, placement.top),
        ))
    }

    fn line_height(&self) -> u16 {
        self.line_height
    }
}

/// Rounds a scaled font measurement to whole pixels.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate, font measurements stay far below i32::MAX"
)]
fn to_pixels(value: f32) -> i32 {
    value.round() as i32
}
