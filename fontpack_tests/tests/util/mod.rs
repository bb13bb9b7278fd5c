// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

use std::path::{Path, PathBuf};

mod asserts;
mod rasterizer;

pub(crate) use asserts::{assert_offsets_contiguous, decode_all};
pub(crate) use rasterizer::ScriptedRasterizer;

/// Returns the path of the small outline font in `assets/fonts`.
///
/// It maps only the space, `-`, `I` and `_`, each drawn on whole pixels at 10 px per em.
pub(crate) fn test_font() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts/FontpackTest-Regular.ttf")
}

/// Returns `len` pseudo-random intensities, the same ones for the same `seed`.
pub(crate) fn noise(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed.wrapping_mul(0x9E37_79B9) | 1;
    (0..len)
        .map(|_| {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
