// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building font assets from rasterized glyphs.

use fontpack::{AssetError, BitDepth, GlyphMetrics, RasterError, build_asset};

use crate::util::{ScriptedRasterizer, assert_offsets_contiguous, decode_all, noise};

/// A rasterizer covering `'A'..='F'` with glyphs of varying size.
fn letters() -> ScriptedRasterizer {
    let mut rasterizer = ScriptedRasterizer::new(12);
    for (i, codepoint) in ('A'..='F').map(u32::from).enumerate() {
        let width = 1 + i as u32;
        let height = 3 + (i as u32 % 2);
        let pixels = noise(codepoint, (width * height) as usize);
        let metrics = GlyphMetrics::new(width as i32 + 1, i as i32 % 2, height as i32);
        rasterizer = rasterizer.gray(codepoint, width, height, pixels, metrics);
    }
    rasterizer
}

#[test]
fn atlas_offsets_are_contiguous() {
    for depth in BitDepth::ALL {
        let conversion = build_asset(&mut letters(), depth, 0x41..=0x46).unwrap();
        assert!(conversion.skipped.is_empty(), "{depth} bpp");
        assert_eq!(conversion.asset.records().len(), 6, "{depth} bpp");
        assert_offsets_contiguous(&conversion.asset);
    }
}

#[test]
fn atlas_round_trips_quantized_pixels() {
    for depth in BitDepth::ALL {
        let conversion = build_asset(&mut letters(), depth, 0x41..=0x46).unwrap();
        for (i, decoded) in decode_all(&conversion.asset).iter().enumerate() {
            let codepoint = 0x41 + i as u32;
            let record = conversion.asset.records()[i];
            let expected: Vec<u8> = noise(codepoint, record.pixel_count())
                .into_iter()
                .map(|v| depth.quantize(v))
                .collect();
            assert_eq!(decoded, &expected, "glyph {i} at {depth} bpp");
        }
    }
}

#[test]
fn atlas_records_metrics() {
    let conversion = build_asset(&mut letters(), BitDepth::Four, 0x41..=0x42).unwrap();
    let records = conversion.asset.records();
    assert_eq!((records[0].width, records[0].height), (1, 3));
    assert_eq!((records[1].width, records[1].height), (2, 4));
    assert_eq!(records[1].x_advance, 3);
    assert_eq!(records[1].x_offset, 1);
    // A glyph rising 4 pixels above the baseline starts 3 rows above the line.
    assert_eq!(records[1].y_offset, -3);
    assert_eq!(conversion.asset.y_advance(), 12);
    assert_eq!((conversion.asset.first(), conversion.asset.last()), (0x41, 0x42));
}

#[test]
fn atlas_skips_failing_code_points() {
    let failing = letters()
        .failing(0x43, RasterError::Render)
        .failing(0x45, RasterError::Unsupported);
    let with_failures = build_asset(&mut failing.clone(), BitDepth::Two, 0x41..=0x46).unwrap();
    assert_eq!(with_failures.skipped, [0x43, 0x45]);
    assert_eq!(with_failures.asset.records().len(), 4);
    assert_offsets_contiguous(&with_failures.asset);

    // The surviving glyphs are packed exactly as if the failures had never been in range.
    let mut reference = Vec::new();
    let mut records = Vec::new();
    for codepoint in [0x41, 0x42, 0x44, 0x46] {
        let single = build_asset(&mut letters(), BitDepth::Two, codepoint..=codepoint).unwrap();
        let (bitstream, single_records) = single.asset.into_parts();
        let mut record = single_records[0];
        record.offset = reference.len() as u32;
        records.push(record);
        reference.extend(bitstream);
    }
    assert_eq!(with_failures.asset.bitstream(), reference);
    assert_eq!(with_failures.asset.records(), records);
}

#[test]
fn atlas_asks_for_every_code_point_once() {
    let mut rasterizer = letters();
    build_asset(&mut rasterizer, BitDepth::One, 0x40..=0x47).unwrap();
    let expected: Vec<_> = (0x40..=0x47).map(|cp| (cp, BitDepth::One)).collect();
    assert_eq!(rasterizer.requests, expected);
}

#[test]
fn atlas_missing_everything_is_empty() {
    let conversion = build_asset(&mut ScriptedRasterizer::new(9), BitDepth::Eight, 0x20..=0x22)
        .unwrap();
    assert_eq!(conversion.skipped, [0x20, 0x21, 0x22]);
    assert!(conversion.asset.records().is_empty());
    assert!(conversion.asset.bitstream().is_empty());
}

#[test]
fn atlas_blank_glyphs_take_no_bytes() {
    let mut rasterizer = ScriptedRasterizer::new(10)
        .blank(0x20, 3)
        .gray(0x21, 8, 1, vec![255; 8], GlyphMetrics::new(9, 0, 1))
        .blank(0x22, 4);
    let conversion = build_asset(&mut rasterizer, BitDepth::One, 0x20..=0x22).unwrap();
    let records = conversion.asset.records();
    assert_eq!(records[0].offset, 0);
    assert_eq!(records[1].offset, 0);
    assert_eq!(records[2].offset, 1);
    assert_eq!(conversion.asset.bitstream(), [0xFF]);
}

#[test]
fn atlas_rejects_reversed_range() {
    #[allow(clippy::reversed_empty_ranges, reason = "the range is reversed on purpose")]
    let range = 0x46..=0x41;
    assert_eq!(
        build_asset(&mut letters(), BitDepth::One, range),
        Err(AssetError::EmptyRange {
            first: 0x46,
            last: 0x41
        })
    );
}
