// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Error returned when a bit depth other than 1, 2, 4 or 8 is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidBitDepth {
    bits: Option<u32>,
}

impl InvalidBitDepth {
    pub(crate) const fn new(bits: u32) -> Self {
        Self { bits: Some(bits) }
    }

    pub(crate) const fn unparsable() -> Self {
        Self { bits: None }
    }

    /// Returns the rejected value, if it was a number at all.
    pub const fn bits(self) -> Option<u32> {
        self.bits
    }
}

impl fmt::Display for InvalidBitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bits {
            Some(bits) => write!(
                f,
                "unsupported bit depth {bits}, only 1, 2, 4 and 8 are supported"
            ),
            None => f.write_str("bit depth must be one of 1, 2, 4 and 8"),
        }
    }
}

impl core::error::Error for InvalidBitDepth {}

/// Error returned when a glyph bitmap's buffer does not match its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitmapError {
    /// The row pitch is too small to hold `width` pixels.
    PitchTooSmall {
        /// Pitch in bytes.
        pitch: usize,
        /// Minimum pitch in bytes for the bitmap's width and format.
        required: usize,
    },
    /// The buffer holds fewer than `pitch * height` bytes.
    BufferTooSmall {
        /// Buffer length in bytes.
        len: usize,
        /// Minimum length in bytes.
        required: usize,
    },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PitchTooSmall { pitch, required } => {
                write!(f, "bitmap pitch {pitch} is smaller than {required}")
            }
            Self::BufferTooSmall { len, required } => {
                write!(f, "bitmap buffer of {len} bytes is smaller than {required}")
            }
        }
    }
}

impl core::error::Error for BitmapError {}

/// Failure to rasterize a single code point.
///
/// These failures are never fatal for a conversion: the code point is left out of the
/// asset and the conversion moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RasterError {
    /// The font has no glyph for the code point.
    MissingGlyph,
    /// The glyph exists but cannot be rendered to a bitmap of the requested kind.
    Unsupported,
    /// Rendering the glyph failed.
    Render,
    /// The rasterizer produced a bitmap that does not match its own dimensions.
    Bitmap(BitmapError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGlyph => f.write_str("no glyph for code point"),
            Self::Unsupported => f.write_str("glyph format is not supported"),
            Self::Render => f.write_str("failed to render glyph"),
            Self::Bitmap(err) => write!(f, "invalid glyph bitmap: {err}"),
        }
    }
}

impl core::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Bitmap(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BitmapError> for RasterError {
    fn from(err: BitmapError) -> Self {
        Self::Bitmap(err)
    }
}

/// Error returned when the parts of a [`FontAsset`](crate::FontAsset) are inconsistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssetError {
    /// The last code point is smaller than the first.
    EmptyRange {
        /// First code point.
        first: u32,
        /// Last code point.
        last: u32,
    },
    /// There are more glyph records than code points in the range.
    TooManyRecords {
        /// Number of records.
        records: usize,
        /// Number of code points in the range.
        range: u32,
    },
    /// A record starts before the record preceding it.
    OffsetDecreasing {
        /// Index of the offending record.
        index: usize,
    },
    /// A record's packed pixels extend past the end of the bitstream.
    OutOfBounds {
        /// Index of the offending record.
        index: usize,
        /// Byte just past the record's packed pixels.
        end: usize,
        /// Length of the bitstream.
        len: usize,
    },
    /// The bitstream is too large to be addressed by a `u32` offset.
    TooLarge,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { first, last } => {
                write!(f, "last code point {last:#x} precedes first {first:#x}")
            }
            Self::TooManyRecords { records, range } => {
                write!(f, "{records} glyph records for a range of {range} code points")
            }
            Self::OffsetDecreasing { index } => {
                write!(f, "glyph {index} starts before the glyph preceding it")
            }
            Self::OutOfBounds { index, end, len } => write!(
                f,
                "glyph {index} ends at byte {end}, past the bitstream length {len}"
            ),
            Self::TooLarge => f.write_str("bitstream exceeds 4 GiB"),
        }
    }
}

impl core::error::Error for AssetError {}
