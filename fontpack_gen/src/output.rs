// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing generated files.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use fontpack::AtlasImage;
use fontpack::header::{BITMAP_FONT_H, HeaderFormat};
use image::{ColorType, ImageFormat};

use crate::Error;

/// File name of the shared C declarations.
pub const BITMAP_FONT_H_NAME: &str = "BitmapFont.h";

/// Returns the path of the header for font `name`.
pub fn header_path(out_dir: &Path, name: &str, format: HeaderFormat) -> PathBuf {
    out_dir.join(format!("{name}.{}", format.extension()))
}

/// Returns the path of the preview image for font `name`.
pub fn preview_path(out_dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let extension = format.extensions_str().first().copied().unwrap_or("img");
    out_dir.join(format!("{name}.{extension}"))
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), Error> {
    fs::write(path, contents).map_err(|err| Error::io(path, err))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Writes `BitmapFont.h` into `out_dir` unless a file of that name is already there.
///
/// Returns the path if the file was written.
pub fn write_support_header(out_dir: &Path) -> Result<Option<PathBuf>, Error> {
    let path = out_dir.join(BITMAP_FONT_H_NAME);
    if path.exists() {
        log::debug!("keeping existing {}", path.display());
        return Ok(None);
    }
    write_file(&path, BITMAP_FONT_H.as_bytes())?;
    Ok(Some(path))
}

/// Encodes `image` as 8-bit grayscale in memory, to be written to `path` later.
///
/// An empty image cannot be encoded; it is skipped with a warning and `None` is returned.
pub fn encode_preview(
    path: &Path,
    image: &AtlasImage,
    format: ImageFormat,
) -> Result<Option<Vec<u8>>, Error> {
    if image.is_empty() {
        log::warn!(
            "not writing {}: the preview has no pixels",
            path.display()
        );
        return Ok(None);
    }
    let mut encoded = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut encoded,
        &image.pixels,
        image.width,
        image.height,
        ColorType::L8,
        format,
    )
    .map_err(|source| Error::Image {
        path: path.to_owned(),
        source,
    })?;
    log::debug!(
        "encoded {}x{} preview for {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(Some(encoded.into_inner()))
}
