// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converts a range of characters of a font file into a bit-packed bitmap font.
//!
//! See `./main.rs` for the command line interface. [`run`] performs one conversion:
//! every glyph is rasterized with Swash, packed with [`fontpack`], and written out as a
//! source header next to a grayscale preview strip.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

// Only the binary uses it.
use env_logger as _;

pub mod config;
pub mod output;
pub mod raster;

mod error;

use std::path::PathBuf;

use fontpack::header::{HeaderFormat, header_string};
use fontpack::{BitDepth, build_asset, render_atlas};

pub use config::{Config, ConfigError};
pub use error::Error;
pub use raster::{FontFile, SwashRasterizer};

/// Summary of a finished conversion.
#[derive(Clone, Debug)]
pub struct Report {
    /// Bits per pixel of the packed font.
    pub depth: BitDepth,
    /// Number of glyph records.
    pub glyphs: usize,
    /// Code points left out because they failed to rasterize.
    pub skipped: Vec<u32>,
    /// Size of the packed bitstream in bytes.
    pub bytes: usize,
    /// The generated source text.
    pub header: String,
    /// Every file written, in order.
    pub written: Vec<PathBuf>,
}

/// Converts the font selected by `config` and writes the output files.
///
/// Nothing is written unless the font loads and packs successfully.
pub fn run(config: &Config) -> Result<Report, Error> {
    config.validate()?;
    let font = FontFile::open(&config.font, config.index)?;
    let mut rasterizer =
        SwashRasterizer::new(font.face()?, config.pixel_size()).hint(!config.no_hint);
    log::debug!("rasterizing with {rasterizer:?}");

    let conversion = build_asset(&mut rasterizer, config.bpp, config.first..=config.last)?;
    let asset = conversion.asset;
    let format = HeaderFormat::from(config.format);
    let header = header_string(&config.name, &asset, format);

    // No file may be created before the preview has been encoded.
    let mut preview = None;
    if let Some(image_format) = config.preview.image_format() {
        let path = output::preview_path(&config.out_dir, &config.name, image_format);
        let encoded = output::encode_preview(&path, &render_atlas(&asset), image_format)?;
        preview = encoded.map(|encoded| (path, encoded));
    }

    let mut written = Vec::new();
    let header_path = output::header_path(&config.out_dir, &config.name, format);
    output::write_file(&header_path, header.as_bytes())?;
    written.push(header_path);
    if format == HeaderFormat::C {
        written.extend(output::write_support_header(&config.out_dir)?);
    }
    if let Some((path, encoded)) = preview {
        output::write_file(&path, &encoded)?;
        written.push(path);
    }

    Ok(Report {
        depth: asset.depth(),
        glyphs: asset.records().len(),
        skipped: conversion.skipped,
        bytes: asset.bitstream().len(),
        header,
        written,
    })
}
