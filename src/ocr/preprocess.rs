//! Image and text preprocessing for the accurate read mode.

use std::path::Path;

use image::ImageReader;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::ocr::OcrError;

/// Write a grayscale PNG copy of `image` to a temporary file.
///
/// The file is removed when the returned handle is dropped.
///
/// # Errors
///
/// Returns `OcrError::Image` if the image cannot be decoded or encoded, or
/// `OcrError::Io` if the temporary file cannot be created.
pub fn grayscale_copy(image: &Path) -> Result<NamedTempFile, OcrError> {
    let gray = ImageReader::open(image)?
        .with_guessed_format()?
        .decode()?
        .to_luma8();

    let file = tempfile::Builder::new()
        .prefix("postal-ocr-")
        .suffix(".png")
        .tempfile()?;
    gray.save_with_format(file.path(), image::ImageFormat::Png)?;

    debug!(
        source = %image.display(),
        width = gray.width(),
        height = gray.height(),
        "wrote grayscale copy"
    );
    Ok(file)
}

/// Keep only the characters of `line` that appear in `allowlist`
#[must_use]
pub fn apply_allowlist(line: &str, allowlist: &str) -> String {
    line.chars().filter(|c| allowlist.contains(*c)).collect()
}
