// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::error::InvalidBitDepth;

/// Number of bits used to store one pixel in a packed font.
///
/// Every depth evenly divides 8, so a byte always holds a whole number of samples.
/// The depth is fixed for a whole [`FontAsset`](crate::FontAsset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// Monochrome, 8 pixels per byte.
    #[default]
    One,
    /// 4 gray levels, 4 pixels per byte.
    Two,
    /// 16 gray levels, 2 pixels per byte.
    Four,
    /// 256 gray levels, 1 pixel per byte.
    Eight,
}

impl BitDepth {
    /// All supported depths, in increasing order.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Four, Self::Eight];

    /// Returns the number of bits per sample.
    pub const fn bits(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Returns the mask selecting the low `bits()` bits of a byte.
    pub const fn mask(self) -> u8 {
        match self {
            Self::Eight => 0xFF,
            _ => (1 << self.bits()) - 1,
        }
    }

    /// Returns the number of samples stored in one byte.
    pub const fn samples_per_byte(self) -> u8 {
        8 / self.bits()
    }

    /// Returns the factor that maps a sample back onto the full `0..=255` range.
    ///
    /// This is `255 / (2^bits - 1)`, which is exact for every supported depth:
    /// 255, 85, 17 and 1.
    pub const fn scale(self) -> u8 {
        255 / self.mask()
    }

    /// Quantizes an 8-bit intensity by keeping its `bits()` most significant bits.
    pub const fn quantize(self, intensity: u8) -> u8 {
        intensity >> (8 - self.bits())
    }

    /// Maps a sample back onto `0..=255`. Bits above `bits()` are ignored.
    pub const fn expand(self, sample: u8) -> u8 {
        (sample & self.mask()) * self.scale()
    }

    /// Returns the number of bytes needed to pack `samples` samples.
    pub const fn packed_len(self, samples: usize) -> usize {
        (samples * self.bits() as usize).div_ceil(8)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = InvalidBitDepth;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            _ => Err(InvalidBitDepth::new(u32::from(bits))),
        }
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = InvalidBitDepth;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        u8::try_from(bits)
            .map_err(|_| InvalidBitDepth::new(bits))
            .and_then(Self::try_from)
    }
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

impl FromStr for BitDepth {
    type Err = InvalidBitDepth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .trim()
            .parse::<u32>()
            .map_err(|_| InvalidBitDepth::unparsable())?;
        Self::try_from(bits)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
