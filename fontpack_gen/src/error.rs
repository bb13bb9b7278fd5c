// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fatal conversion errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

use fontpack::AssetError;

use crate::config::ConfigError;

/// An error that aborts a conversion.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The command line options are inconsistent.
    Config(ConfigError),
    /// Reading the font or writing an output file failed.
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The font file could not be parsed.
    FontLoad {
        /// The font file.
        path: PathBuf,
        /// The requested face index.
        index: u32,
    },
    /// The packed font could not be assembled.
    Asset(AssetError),
    /// Encoding the preview image failed.
    Image {
        /// The image file.
        path: PathBuf,
        /// The underlying error.
        source: image::ImageError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid options: {err}"),
            Self::Io { path, source } => write!(f, "'{}': {source}", path.display()),
            Self::FontLoad { path, index } => write!(
                f,
                "failed to load font face {index} from '{}'",
                path.display()
            ),
            Self::Asset(err) => write!(f, "failed to assemble the font: {err}"),
            Self::Image { path, source } => {
                write!(f, "failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::FontLoad { .. } => None,
            Self::Asset(err) => Some(err),
            Self::Image { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Self::Asset(err)
    }
}
