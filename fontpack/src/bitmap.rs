// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizer output bitmaps.

use alloc::vec::Vec;

use crate::BitDepth;
use crate::error::BitmapError;

/// Storage layout of the pixels of a [`GlyphBitmap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One bit per pixel, most significant bit first within a byte.
    Mono,
    /// One byte of coverage per pixel.
    #[default]
    Gray,
}

impl PixelFormat {
    /// Returns the minimum number of bytes needed to store a row of `width` pixels.
    pub const fn min_pitch(self, width: u32) -> usize {
        match self {
            Self::Mono => (width as usize).div_ceil(8),
            Self::Gray => width as usize,
        }
    }
}

/// A rendered glyph image, stored row by row.
///
/// Rows may be padded: row `y` starts at byte `y * pitch`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: u32,
    height: u32,
    pitch: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl GlyphBitmap {
    /// Creates a bitmap, checking that `data` covers `height` rows of `pitch` bytes.
    pub fn new(
        width: u32,
        height: u32,
        pitch: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, BitmapError> {
        let required = format.min_pitch(width);
        if height > 0 && pitch < required {
            return Err(BitmapError::PitchTooSmall { pitch, required });
        }
        let required = pitch * height as usize;
        if data.len() < required {
            return Err(BitmapError::BufferTooSmall {
                len: data.len(),
                required,
            });
        }
        Ok(Self {
            width,
            height,
            pitch,
            format,
            data,
        })
    }

    /// Creates a bitmap with one coverage byte per pixel.
    pub fn gray(width: u32, height: u32, pitch: usize, data: Vec<u8>) -> Result<Self, BitmapError> {
        Self::new(width, height, pitch, PixelFormat::Gray, data)
    }

    /// Creates a bitmap with one bit per pixel.
    pub fn mono(width: u32, height: u32, pitch: usize, data: Vec<u8>) -> Result<Self, BitmapError> {
        Self::new(width, height, pitch, PixelFormat::Mono, data)
    }

    /// Creates a bitmap without pixels, as used for blank glyphs like the space.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Packs coverage values into a [`PixelFormat::Mono`] bitmap.
    ///
    /// Pixels with coverage of at least `threshold` are set.
    pub fn threshold(&self, threshold: u8) -> Self {
        if self.format == PixelFormat::Mono {
            return self.clone();
        }
        let pitch = PixelFormat::Mono.min_pitch(self.width);
        let mut data = alloc::vec![0_u8; pitch * self.height as usize];
        for y in 0..self.height {
            let row = &mut data[y as usize * pitch..][..pitch];
            for x in 0..self.width {
                if self.gray_at(x, y) >= threshold {
                    row[x as usize / 8] |= 0x80 >> (x & 7);
                }
            }
        }
        Self {
            width: self.width,
            height: self.height,
            pitch,
            format: PixelFormat::Mono,
            data,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of bytes between the starts of two rows.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Returns the pixel format.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the raw pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the pixel at `(x, y)` quantized to `depth`.
    ///
    /// A mono pixel reads as `0` or the largest sample of the depth. A gray pixel keeps
    /// its `depth` most significant bits.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the bitmap.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, depth: BitDepth) -> u8 {
        match self.format {
            PixelFormat::Mono => {
                if self.mono_at(x, y) {
                    depth.mask()
                } else {
                    0
                }
            }
            PixelFormat::Gray => depth.quantize(self.gray_at(x, y)),
        }
    }

    /// Returns every pixel quantized to `depth`, in row-major order.
    pub fn samples(&self, depth: BitDepth) -> impl Iterator<Item = u8> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| self.sample(x, y, depth)))
    }

    fn mono_at(&self, x: u32, y: u32) -> bool {
        let byte = self.data[y as usize * self.pitch + x as usize / 8];
        byte & (0x80 >> (x & 7)) != 0
    }

    fn gray_at(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.pitch + x as usize]
    }
}
