// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of rasterized glyphs into a packed [`FontAsset`].

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::error::{AssetError, RasterError};
use crate::{BitDepth, BitEncoder, FontAsset, GlyphRecord, RasterizedGlyph};

/// Source of glyph bitmaps for a conversion.
pub trait Rasterizer {
    /// Renders the glyph for `codepoint`.
    ///
    /// `depth` is the depth the glyph will be packed at. Rasterizers may use it to pick a
    /// native rendering mode, for example a monochrome target at depth 1.
    fn rasterize(
        &mut self,
        codepoint: u32,
        depth: BitDepth,
    ) -> Result<RasterizedGlyph, RasterError>;

    /// Returns the distance between two baselines, in pixels.
    fn line_height(&self) -> u16;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &mut R {
    fn rasterize(
        &mut self,
        codepoint: u32,
        depth: BitDepth,
    ) -> Result<RasterizedGlyph, RasterError> {
        (**self).rasterize(codepoint, depth)
    }

    fn line_height(&self) -> u16 {
        (**self).line_height()
    }
}

/// Accumulates glyphs into a shared bitstream.
///
/// Glyphs must be pushed in code point order. Each glyph starts on a fresh byte.
#[derive(Clone, Debug, Default)]
pub struct AtlasBuilder {
    depth: BitDepth,
    bitstream: Vec<u8>,
    records: Vec<GlyphRecord>,
}

impl AtlasBuilder {
    /// Creates an empty builder packing samples at `depth`.
    pub fn new(depth: BitDepth) -> Self {
        Self {
            depth,
            bitstream: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Returns the sample depth.
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Returns the records pushed so far.
    pub fn records(&self) -> &[GlyphRecord] {
        &self.records
    }

    /// Returns the number of bytes packed so far.
    pub fn packed_len(&self) -> usize {
        self.bitstream.len()
    }

    /// Packs a glyph and returns its record.
    ///
    /// Fails with [`RasterError::Unsupported`] when the glyph's dimensions or metrics do
    /// not fit a [`GlyphRecord`]. Nothing is appended in that case.
    pub fn push(&mut self, glyph: &RasterizedGlyph) -> Result<GlyphRecord, RasterError> {
        let record = self.record_for(glyph).ok_or(RasterError::Unsupported)?;
        let bitmap = &glyph.bitmap;
        let mut encoder = BitEncoder::new(&mut self.bitstream, self.depth);
        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                encoder.encode(bitmap.sample(x, y, self.depth));
            }
        }
        encoder.commit();
        self.records.push(record);
        Ok(record)
    }

    /// Finishes the conversion of the code points `first..=last`.
    pub fn finish(self, first: u32, last: u32, y_advance: u16) -> Result<FontAsset, AssetError> {
        FontAsset::from_parts(
            self.depth,
            self.bitstream,
            self.records,
            first,
            last,
            y_advance,
        )
    }

    fn record_for(&self, glyph: &RasterizedGlyph) -> Option<GlyphRecord> {
        let metrics = glyph.metrics;
        Some(GlyphRecord {
            offset: u32::try_from(self.bitstream.len()).ok()?,
            width: u16::try_from(glyph.bitmap.width()).ok()?,
            height: u16::try_from(glyph.bitmap.height()).ok()?,
            x_advance: i16::try_from(metrics.advance).ok()?,
            x_offset: i16::try_from(metrics.left).ok()?,
            // Flip from an upward bearing to a downward offset below the line.
            y_offset: i16::try_from(1_i32.checked_sub(metrics.top)?).ok()?,
        })
    }
}

/// Result of [`build_asset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    /// The converted font.
    pub asset: FontAsset,
    /// Code points that failed to rasterize and were left out, in ascending order.
    pub skipped: Vec<u32>,
}

/// Rasterizes and packs every code point in `range`.
///
/// A code point that fails to rasterize is logged and left out; the records of the
/// following glyphs are packed as if it had never been part of the range.
pub fn build_asset<R: Rasterizer + ?Sized>(
    rasterizer: &mut R,
    depth: BitDepth,
    range: RangeInclusive<u32>,
) -> Result<Conversion, AssetError> {
    let (first, last) = (*range.start(), *range.end());
    if last < first {
        return Err(AssetError::EmptyRange { first, last });
    }
    let mut builder = AtlasBuilder::new(depth);
    let mut skipped = Vec::new();
    for codepoint in range {
        let packed = rasterizer
            .rasterize(codepoint, depth)
            .and_then(|glyph| builder.push(&glyph));
        match packed {
            Ok(record) => log::debug!(
                "packed U+{codepoint:04X}: {}x{}, {} bytes at offset {}",
                record.width,
                record.height,
                record.packed_len(depth),
                record.offset
            ),
            Err(err) => {
                log::warn!("skipping U+{codepoint:04X}: {err}");
                skipped.push(codepoint);
            }
        }
    }
    let asset = builder.finish(first, last, rasterizer.line_height())?;
    log::info!(
        "packed {} glyphs into {} bytes at {} bpp ({} skipped)",
        asset.records().len(),
        asset.bitstream().len(),
        depth,
        skipped.len()
    );
    Ok(Conversion { asset, skipped })
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::{GlyphBitmap, GlyphMetrics};

    /// Renders code point `c` as a `w x 1` gray bar of full coverage, where `w = c % 5`.
    /// Code points divisible by 7 are missing.
    struct Bars;

    impl Rasterizer for Bars {
        fn rasterize(
            &mut self,
            codepoint: u32,
            _depth: BitDepth,
        ) -> Result<RasterizedGlyph, RasterError> {
            if codepoint % 7 == 0 {
                return Err(RasterError::MissingGlyph);
            }
            let width = codepoint % 5;
            let bitmap = GlyphBitmap::gray(width, 1, width as usize, vec![255; width as usize])?;
            let advance = i32::try_from(width).unwrap() + 1;
            Ok(RasterizedGlyph::new(
                bitmap,
                GlyphMetrics::new(advance, 0, 1),
            ))
        }

        fn line_height(&self) -> u16 {
            9
        }
    }

    #[test]
    fn builder_two_bit_scenario() {
        let mut builder = AtlasBuilder::new(BitDepth::Two);
        let bitmap = GlyphBitmap::gray(4, 1, 4, vec![0, 85, 170, 255]).unwrap();
        let glyph = RasterizedGlyph::new(bitmap, GlyphMetrics::new(5, 0, 1));
        builder.push(&glyph).unwrap();
        let asset = builder.finish(0x41, 0x41, 8).unwrap();
        assert_eq!(asset.bitstream(), &[0xE4]);
    }

    #[test]
    fn builder_mono_white_row() {
        let mut builder = AtlasBuilder::new(BitDepth::One);
        let bitmap = GlyphBitmap::mono(8, 1, 1, vec![0xFF]).unwrap();
        builder
            .push(&RasterizedGlyph::new(bitmap, GlyphMetrics::default()))
            .unwrap();
        assert_eq!(builder.packed_len(), 1);
        let asset = builder.finish(0, 0, 1).unwrap();
        assert_eq!(asset.bitstream(), &[0xFF]);
    }

    #[test]
    fn builder_record_metrics() {
        let mut builder = AtlasBuilder::new(BitDepth::Four);
        let bitmap = GlyphBitmap::gray(3, 2, 3, vec![0; 6]).unwrap();
        let record = builder
            .push(&RasterizedGlyph::new(bitmap, GlyphMetrics::new(7, -1, 9)))
            .unwrap();
        assert_eq!(
            record,
            GlyphRecord {
                offset: 0,
                width: 3,
                height: 2,
                x_advance: 7,
                x_offset: -1,
                y_offset: -8,
            }
        );
    }

    #[test]
    fn builder_offsets_follow_packed_lengths() {
        let mut builder = AtlasBuilder::new(BitDepth::Four);
        for width in [3_u32, 0, 1, 4] {
            let bitmap =
                GlyphBitmap::gray(width, 3, width as usize, vec![0x80; width as usize * 3])
                    .unwrap();
            builder
                .push(&RasterizedGlyph::new(bitmap, GlyphMetrics::default()))
                .unwrap();
        }
        let offsets: Vec<u32> = builder.records().iter().map(|r| r.offset).collect();
        // 9 samples -> 5 bytes, 0 -> 0, 3 -> 2, 12 -> 6.
        assert_eq!(offsets, [0, 5, 5, 7]);
        assert_eq!(builder.packed_len(), 13);
    }

    #[test]
    fn builder_rejects_oversized_metrics() {
        let mut builder = AtlasBuilder::new(BitDepth::One);
        let glyph = RasterizedGlyph::new(GlyphBitmap::empty(), GlyphMetrics::new(40_000, 0, 0));
        assert_eq!(builder.push(&glyph), Err(RasterError::Unsupported));
        assert!(builder.records().is_empty(), "nothing may be recorded");
        assert_eq!(builder.packed_len(), 0);
    }

    #[test]
    fn build_skips_failed_code_points() {
        let conversion = build_asset(&mut Bars, BitDepth::One, 5..=15).unwrap();
        assert_eq!(conversion.skipped, [7, 14]);

        let asset = &conversion.asset;
        assert_eq!(asset.first(), 5);
        assert_eq!(asset.last(), 15);
        assert_eq!(asset.y_advance(), 9);
        let widths: Vec<u16> = asset.records().iter().map(|r| r.width).collect();
        assert_eq!(widths, [0, 1, 3, 4, 0, 1, 2, 3, 0]);

        let mut expected = 0;
        for record in asset.records() {
            assert_eq!(record.offset, expected, "offset of {record:?}");
            expected += u32::try_from(record.packed_len(BitDepth::One)).unwrap();
        }
        assert_eq!(expected as usize, asset.bitstream().len());
    }

    #[test]
    fn build_logs_packed_length() {
        let lines = capture::logs(|| {
            build_asset(&mut Bars, BitDepth::Four, 3..=4).unwrap();
        });
        assert!(
            lines.contains(&"packed U+0003: 3x1, 2 bytes at offset 0".into()),
            "{lines:?}"
        );
        assert!(
            lines.contains(&"packed U+0004: 4x1, 2 bytes at offset 2".into()),
            "{lines:?}"
        );
    }

    #[test]
    fn build_rejects_reversed_range() {
        #[allow(clippy::reversed_empty_ranges, reason = "testing the error path")]
        let range = 10..=9;
        assert_eq!(
            build_asset(&mut Bars, BitDepth::One, range),
            Err(AssetError::EmptyRange { first: 10, last: 9 })
        );
    }

    /// Collects the messages logged on the current thread.
    mod capture {
        extern crate std;

        use alloc::format;
        use alloc::string::String;
        use alloc::vec::Vec;
        use std::cell::RefCell;

        std::thread_local! {
            static LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        }

        #[derive(Debug)]
        struct Capture;

        impl log::Log for Capture {
            fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                LINES.with(|lines| lines.borrow_mut().push(format!("{}", record.args())));
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture;

        pub(super) fn logs(f: impl FnOnce()) -> Vec<String> {
            // Another test may have installed the logger already.
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(log::LevelFilter::Trace);
            LINES.with(|lines| lines.borrow_mut().clear());
            f();
            LINES.with(RefCell::take)
        }
    }
}
