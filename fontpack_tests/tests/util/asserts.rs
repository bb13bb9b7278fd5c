// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers to assert truths about packed fonts.

use fontpack::FontAsset;

/// Assert that every record starts right where the previous one ends.
pub(crate) fn assert_offsets_contiguous(asset: &FontAsset) {
    let depth = asset.depth();
    let mut expected = 0_usize;
    for (i, record) in asset.records().iter().enumerate() {
        assert_eq!(
            record.offset as usize, expected,
            "record {i} does not start after its predecessor"
        );
        expected += depth.packed_len(record.pixel_count());
    }
    assert_eq!(
        asset.bitstream().len(),
        expected,
        "bitstream has trailing bytes"
    );
}

/// Decode the samples of every record of `asset`.
pub(crate) fn decode_all(asset: &FontAsset) -> Vec<Vec<u8>> {
    asset
        .records()
        .iter()
        .map(|record| asset.samples(record).collect())
        .collect()
}
