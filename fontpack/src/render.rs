// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unpacking a [`FontAsset`] into a preview strip.

use alloc::vec;
use alloc::vec::Vec;

use crate::FontAsset;

/// An 8-bit grayscale image, stored row by row without padding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtlasImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height` intensities.
    pub pixels: Vec<u8>,
}

impl AtlasImage {
    /// Creates a black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Returns `true` if the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the intensity at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    fn put(&mut self, x: i64, y: i64, value: u8) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = value;
        true
    }
}

/// Unpacks every glyph of `asset` into a single row, for checking a conversion by eye.
///
/// The image is as wide as the sum of all advances and one line high. Glyphs are placed
/// left to right, each shifted down far enough that no glyph starts above the first row.
/// Samples are scaled back to the full `0..=255` range.
///
/// Pixels that fall outside the image, which only happens when a glyph's metrics exceed
/// the font's line box, are dropped and logged.
pub fn render_atlas(asset: &FontAsset) -> AtlasImage {
    let records = asset.records();
    let width: i64 = records.iter().map(|g| i64::from(g.x_advance)).sum();
    let min_y_offset = records
        .iter()
        .map(|g| i64::from(g.y_offset))
        .min()
        .unwrap_or(0)
        .min(0);
    let width = u32::try_from(width.max(0)).unwrap_or(u32::MAX);
    let mut image = AtlasImage::new(width, u32::from(asset.y_advance()));

    let depth = asset.depth();
    let origin_y = -min_y_offset;
    let mut origin_x = 0_i64;
    for (index, glyph) in records.iter().enumerate() {
        let left = origin_x + i64::from(glyph.x_offset);
        let top = origin_y + i64::from(glyph.y_offset);
        let mut samples = asset.samples(glyph);
        let mut dropped = 0_usize;
        for sy in 0..i64::from(glyph.height) {
            for sx in 0..i64::from(glyph.width) {
                let Some(sample) = samples.next() else {
                    break;
                };
                if !image.put(left + sx, top + sy, depth.expand(sample)) {
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            log::warn!("glyph {index}: {dropped} pixels fall outside the preview");
        }
        origin_x += i64::from(glyph.x_advance);
    }
    image
}
