// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bit-packed bitmap fonts for constrained environments.
//!
//! A font is converted by rasterizing every code point of a contiguous range, quantizing
//! each pixel to a fixed [`BitDepth`] and appending the samples of every glyph to one shared
//! byte stream. The result is a [`FontAsset`]: the packed bytes plus one [`GlyphRecord`] per
//! glyph, which can be emitted as source text with [`header`] or unpacked again into a
//! preview strip with [`render_atlas`].
//!
//! Samples are packed least-significant-bits first, and every glyph starts on a fresh byte.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in `log`. The crate itself only
//!   needs `alloc`.
//!
//! ## Example
//!
//! ```
//! use fontpack::{AtlasBuilder, BitDepth, GlyphBitmap, GlyphMetrics, RasterizedGlyph};
//!
//! let mut builder = AtlasBuilder::new(BitDepth::Two);
//! let bitmap = GlyphBitmap::gray(4, 1, 4, vec![0, 85, 170, 255]).unwrap();
//! let glyph = RasterizedGlyph::new(bitmap, GlyphMetrics::new(5, 0, 1));
//! let record = builder.push(&glyph).unwrap();
//! assert_eq!(record.offset, 0);
//!
//! let asset = builder.finish('A' as u32, 'A' as u32, 8).unwrap();
//! assert_eq!(asset.bitstream(), &[0xE4]);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod asset;
mod bitmap;
mod bitstream;
mod builder;
mod depth;
mod error;
mod glyph;
mod render;

pub mod header;

pub use asset::{FontAsset, GlyphSamples};
pub use bitmap::{GlyphBitmap, PixelFormat};
pub use bitstream::{BitDecoder, BitEncoder};
pub use builder::{AtlasBuilder, Conversion, Rasterizer, build_asset};
pub use depth::BitDepth;
pub use error::{AssetError, BitmapError, InvalidBitDepth, RasterError};
pub use glyph::{GlyphMetrics, GlyphRecord, RasterizedGlyph};
pub use render::{AtlasImage, render_atlas};
