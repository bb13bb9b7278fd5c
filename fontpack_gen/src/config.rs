// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line options.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use fontpack::BitDepth;
use fontpack::header::{HeaderFormat, is_identifier};
use log::LevelFilter;

/// Resolution at which a font size equals its size in pixels.
const POINTS_PER_INCH: u32 = 72;

/// Converts a range of characters of a font into a bit-packed bitmap font.
///
/// Writes `<NAME>.h` (or `<NAME>.rs`) and a `<NAME>.bmp` preview into the output directory.
#[derive(Clone, Debug, Parser)]
#[command(name = "fontpack", version)]
pub struct Config {
    /// Font file (TrueType, OpenType or a collection).
    pub font: PathBuf,

    /// Font name, used for the output files and the emitted symbols.
    pub name: String,

    /// Font size.
    #[arg(short, long, default_value_t = 10)]
    pub size: u32,

    /// Resolution used to turn the size into pixels. 72 makes the size a pixel size.
    #[arg(long, default_value_t = POINTS_PER_INCH)]
    pub dpi: u32,

    /// Bits per pixel: 1, 2, 4 or 8.
    #[arg(short, long, default_value_t = BitDepth::One)]
    pub bpp: BitDepth,

    /// First character, as a number (`32`, `0x20`, `U+0020`) or the character itself.
    #[arg(short, long, default_value = "0x20", value_parser = parse_codepoint)]
    pub first: u32,

    /// Last character, inclusive.
    #[arg(short, long, default_value = "0x7e", value_parser = parse_codepoint)]
    pub last: u32,

    /// Face index within a font collection.
    #[arg(short, long, default_value_t = 0)]
    pub index: u32,

    /// Source format of the generated header.
    #[arg(long, value_enum, default_value_t = SourceFormat::C)]
    pub format: SourceFormat,

    /// Directory receiving the generated files.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Image format of the preview strip.
    #[arg(long, value_enum, default_value_t = PreviewFormat::Bmp)]
    pub preview: PreviewFormat,

    /// Also print the generated header to stdout.
    #[arg(long)]
    pub stdout: bool,

    /// Render outlines without hinting.
    #[arg(long)]
    pub no_hint: bool,

    /// Log more; repeat for even more.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// Checks the options that clap cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.dpi == 0 {
            return Err(ConfigError::ZeroDpi);
        }
        for codepoint in [self.first, self.last] {
            if codepoint > u32::from(char::MAX) {
                return Err(ConfigError::CodepointOutOfRange(codepoint));
            }
        }
        if self.first > self.last {
            return Err(ConfigError::ReversedRange {
                first: self.first,
                last: self.last,
            });
        }
        if !is_identifier(&self.name) {
            return Err(ConfigError::InvalidName(self.name.clone()));
        }
        Ok(())
    }

    /// Returns the pixels per em to render at.
    pub fn pixel_size(&self) -> f32 {
        self.size as f32 * self.dpi as f32 / POINTS_PER_INCH as f32
    }

    /// Returns the log level selected by `--verbose` and `--quiet`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Source format choices for `--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceFormat {
    /// C header including `BitmapFont.h`.
    #[default]
    C,
    /// Rust module.
    Rust,
}

impl From<SourceFormat> for HeaderFormat {
    fn from(format: SourceFormat) -> Self {
        match format {
            SourceFormat::C => Self::C,
            SourceFormat::Rust => Self::Rust,
        }
    }
}

/// Image format choices for `--preview`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    /// 8-bit grayscale BMP.
    #[default]
    Bmp,
    /// 8-bit grayscale PNG.
    Png,
    /// Do not write a preview.
    None,
}

impl PreviewFormat {
    /// Returns the image format to encode with, or `None` when no preview is wanted.
    pub fn image_format(self) -> Option<image::ImageFormat> {
        match self {
            Self::Bmp => Some(image::ImageFormat::Bmp),
            Self::Png => Some(image::ImageFormat::Png),
            Self::None => None,
        }
    }
}

/// Options that parse but make no sense together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `--size` is zero.
    ZeroSize,
    /// `--dpi` is zero.
    ZeroDpi,
    /// A code point lies beyond U+10FFFF.
    CodepointOutOfRange(u32),
    /// `--first` is larger than `--last`.
    ReversedRange {
        /// First code point.
        first: u32,
        /// Last code point.
        last: u32,
    },
    /// The font name is not an identifier.
    InvalidName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => f.write_str("font size must not be zero"),
            Self::ZeroDpi => f.write_str("resolution must not be zero"),
            Self::CodepointOutOfRange(cp) => write!(f, "code point {cp:#x} is beyond U+10FFFF"),
            Self::ReversedRange { first, last } => {
                write!(f, "last character {last:#x} precedes first character {first:#x}")
            }
            Self::InvalidName(name) => write!(
                f,
                "font name '{name}' must start with a letter or '_' and contain only ASCII letters, digits and '_'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parses a code point given as a decimal or hexadecimal number, or as the character itself.
pub fn parse_codepoint(s: &str) -> Result<u32, String> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix("U+"))
        .or_else(|| s.strip_prefix("u+"));
    if let Some(hex) = hex {
        return u32::from_str_radix(hex, 16).map_err(|err| format!("invalid hex number: {err}"));
    }
    if let Ok(number) = s.parse::<u32>() {
        return Ok(number);
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(u32::from(c)),
        _ => Err(format!(
            "'{s}' is neither a number nor a single character"
        )),
    }
}
