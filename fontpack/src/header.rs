// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Source text for embedding a [`FontAsset`] in firmware.
//!
//! [`HeaderFormat::C`] produces a header declaring the packed bytes, the glyph table and a
//! `BitmapFont` tying them together; the struct definitions it relies on are in
//! [`BITMAP_FONT_H`]. [`HeaderFormat::Rust`] produces a module of plain constants.

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::FontAsset;

/// Bytes per line of the emitted byte array.
const BYTES_PER_LINE: usize = 16;

/// Declarations of `BitmapFontGlyph` and `BitmapFont`, included by every C header.
pub const BITMAP_FONT_H: &str = "\
#ifndef __BITMAP_FONT_H__
#define __BITMAP_FONT_H__

#include <stdint.h>

typedef struct {
    uint32_t offset;
    uint16_t width;
    uint16_t height;
    int16_t xAdvance;
    int16_t xOffset;
    int16_t yOffset;
} BitmapFontGlyph;

typedef struct {
    uint8_t bpp;
    const uint8_t *bitmap;
    const BitmapFontGlyph *glyphs;
    uint32_t first;
    uint32_t last;
    uint16_t yAdvance;
} BitmapFont;

#endif // __BITMAP_FONT_H__
";

/// Flavour of source text to emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderFormat {
    /// A C header including `BitmapFont.h`.
    #[default]
    C,
    /// A Rust module of `pub const` items.
    Rust,
}

impl HeaderFormat {
    /// Returns the conventional file extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::C => "h",
            Self::Rust => "rs",
        }
    }
}

/// Returns `true` if `name` can be used as a C and Rust identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
}

/// Writes `asset` as source text declaring symbols derived from `name`.
pub fn write_header<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    asset: &FontAsset,
    format: HeaderFormat,
) -> fmt::Result {
    match format {
        HeaderFormat::C => write_c(out, name, asset),
        HeaderFormat::Rust => write_rust(out, name, asset),
    }
}

/// Returns `asset` as source text, see [`write_header`].
pub fn header_string(name: &str, asset: &FontAsset, format: HeaderFormat) -> String {
    let mut out = String::new();
    // Writing to a `String` cannot fail.
    let _ = write_header(&mut out, name, asset, format);
    out
}

fn write_c<W: Write + ?Sized>(out: &mut W, name: &str, asset: &FontAsset) -> fmt::Result {
    let guard = format!("__{}_H__", name.to_ascii_uppercase());
    writeln!(out, "#ifndef {guard}")?;
    writeln!(out, "#define {guard}")?;
    writeln!(out)?;
    writeln!(out, "#include \"BitmapFont.h\"")?;
    writeln!(out)?;

    writeln!(out, "static uint8_t {name}_bitmap[] = {{")?;
    write_c_bytes(out, asset.bitstream())?;
    writeln!(out)?;
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(out, "static BitmapFontGlyph {name}_glyphs[] = {{")?;
    for g in asset.records() {
        writeln!(
            out,
            "    {{ {}, {}, {}, {}, {}, {} }},",
            g.offset, g.width, g.height, g.x_advance, g.x_offset, g.y_offset
        )?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(out, "static BitmapFont {name} = {{")?;
    writeln!(
        out,
        "    {}, {name}_bitmap, {name}_glyphs, {}, {}, {}",
        asset.depth(),
        asset.first(),
        asset.last(),
        asset.y_advance()
    )?;
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "#endif // {guard}")
}

fn write_rust<W: Write + ?Sized>(out: &mut W, name: &str, asset: &FontAsset) -> fmt::Result {
    writeln!(out, "//! Bitmap font `{name}`.")?;
    writeln!(out)?;
    writeln!(out, "/// Bits per pixel.")?;
    writeln!(out, "pub const DEPTH: u8 = {};", asset.depth())?;
    writeln!(out, "/// First code point.")?;
    writeln!(out, "pub const FIRST: u32 = {:#x};", asset.first())?;
    writeln!(out, "/// Last code point, inclusive.")?;
    writeln!(out, "pub const LAST: u32 = {:#x};", asset.last())?;
    writeln!(out, "/// Line height in pixels.")?;
    writeln!(out, "pub const Y_ADVANCE: u16 = {};", asset.y_advance())?;
    writeln!(out)?;

    let bitstream = asset.bitstream();
    writeln!(out, "/// Packed pixels, least significant bits first.")?;
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(out, "pub const BITMAP: [u8; {}] = [", bitstream.len())?;
    write_bytes(out, bitstream, "    ")?;
    writeln!(out, "];")?;
    writeln!(out)?;

    let records = asset.records();
    writeln!(
        out,
        "/// `(offset, width, height, x_advance, x_offset, y_offset)` per glyph."
    )?;
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(
        out,
        "pub const GLYPHS: [(u32, u16, u16, i16, i16, i16); {}] = [",
        records.len()
    )?;
    for g in records {
        writeln!(
            out,
            "    ({}, {}, {}, {}, {}, {}),",
            g.offset, g.width, g.height, g.x_advance, g.x_offset, g.y_offset
        )?;
    }
    writeln!(out, "];")
}

/// Writes `bytes` as rows of a C initializer: `", "` between bytes, including at the end
/// of a full row, and nothing after the last byte.
fn write_c_bytes<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    for (i, byte) in bytes.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            out.write_str("    ")?;
        }
        write!(out, "{byte:#04x}")?;
        if i + 1 == bytes.len() {
            break;
        }
        out.write_str(", ")?;
        if i % BYTES_PER_LINE == BYTES_PER_LINE - 1 {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes `bytes` as rows of a Rust array literal, each byte followed by a comma.
fn write_bytes<W: Write + ?Sized>(out: &mut W, bytes: &[u8], indent: &str) -> fmt::Result {
    for line in bytes.chunks(BYTES_PER_LINE) {
        out.write_str(indent)?;
        for (i, byte) in line.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{byte:#04x},")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
