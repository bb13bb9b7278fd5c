// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The packed font.

use alloc::vec::Vec;
use core::ops::Range;

use crate::error::AssetError;
use crate::{BitDecoder, BitDepth, GlyphRecord};

/// A converted font: packed glyph pixels plus one record per glyph.
///
/// Records are kept in code point order. Once built, an asset is immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontAsset {
    depth: BitDepth,
    bitstream: Vec<u8>,
    records: Vec<GlyphRecord>,
    first: u32,
    last: u32,
    y_advance: u16,
}

impl FontAsset {
    /// Assembles an asset from its parts, checking that every record lies within the
    /// bitstream and that offsets never decrease.
    pub fn from_parts(
        depth: BitDepth,
        bitstream: Vec<u8>,
        records: Vec<GlyphRecord>,
        first: u32,
        last: u32,
        y_advance: u16,
    ) -> Result<Self, AssetError> {
        if last < first {
            return Err(AssetError::EmptyRange { first, last });
        }
        let range = last - first;
        if records.len() > (range as usize).saturating_add(1) {
            return Err(AssetError::TooManyRecords {
                records: records.len(),
                range: range.saturating_add(1),
            });
        }
        if u32::try_from(bitstream.len()).is_err() {
            return Err(AssetError::TooLarge);
        }
        let mut previous = 0;
        for (index, record) in records.iter().enumerate() {
            if record.offset < previous {
                return Err(AssetError::OffsetDecreasing { index });
            }
            previous = record.offset;
            let end = record.end(depth);
            if end > bitstream.len() {
                return Err(AssetError::OutOfBounds {
                    index,
                    end,
                    len: bitstream.len(),
                });
            }
        }
        Ok(Self {
            depth,
            bitstream,
            records,
            first,
            last,
            y_advance,
        })
    }

    /// Returns the sample depth.
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Returns the packed pixels of all glyphs.
    pub fn bitstream(&self) -> &[u8] {
        &self.bitstream
    }

    /// Returns the glyph records, in code point order.
    pub fn records(&self) -> &[GlyphRecord] {
        &self.records
    }

    /// Returns the first code point of the converted range.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Returns the last code point of the converted range, inclusive.
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Returns the line height in pixels.
    pub fn y_advance(&self) -> u16 {
        self.y_advance
    }

    /// Returns the byte range holding the packed pixels of record `index`.
    pub fn glyph_bytes(&self, index: usize) -> Option<Range<usize>> {
        let record = self.records.get(index)?;
        Some(record.offset as usize..record.end(self.depth))
    }

    /// Returns the decoded samples of `record`, in row-major order.
    ///
    /// The record must belong to this asset.
    pub fn samples(&self, record: &GlyphRecord) -> GlyphSamples<'_> {
        GlyphSamples {
            decoder: BitDecoder::new(&self.bitstream, record.offset as usize, self.depth),
            remaining: record.pixel_count(),
        }
    }

    /// Consumes the asset, returning its bitstream and records.
    pub fn into_parts(self) -> (Vec<u8>, Vec<GlyphRecord>) {
        (self.bitstream, self.records)
    }
}

/// Iterator over the samples of one glyph, created by [`FontAsset::samples`].
#[derive(Clone, Debug)]
pub struct GlyphSamples<'a> {
    decoder: BitDecoder<'a>,
    remaining: usize,
}

impl Iterator for GlyphSamples<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.decoder.decode())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GlyphSamples<'_> {}
