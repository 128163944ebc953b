//! Centralized validation and helper functions.

use std::io::Read;
use std::path::{Path, PathBuf};

/// Maximum number of addresses loaded from a single list (DOS protection)
pub const MAX_ADDRESSES: usize = 2_000_000;

/// Image extensions accepted for scanning
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff"];

/// Check if adding another address would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new address.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_address_limit(addresses.len()).is_some() {
///     return Err(...);
/// }
/// addresses.push(new_address); // Safe to add
/// ```
#[must_use]
pub fn check_address_limit(count: usize) -> Option<String> {
    if count >= MAX_ADDRESSES {
        Some(format!(
            "Too many addresses: adding another would exceed maximum of {MAX_ADDRESSES}"
        ))
    } else {
        None
    }
}

/// Image validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No image selected")]
    EmptyPath,
    #[error("Image not found: {0}")]
    NotFound(PathBuf),
    #[error("Unsupported image type '{0}' (expected png, jpg, jpeg, tif or tiff)")]
    UnsupportedExtension(String),
    #[error("File content does not look like a {0} image")]
    InvalidImageContent(String),
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

/// Check if a path carries one of the supported image extensions
///
/// # Examples
///
/// ```
/// use postal_ocr::utils::validation::has_image_extension;
/// use std::path::Path;
///
/// assert!(has_image_extension(Path::new("letter.PNG")));
/// assert!(!has_image_extension(Path::new("letter.pdf")));
/// ```
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Validate file content using magic numbers for the supported image formats
///
/// Guards against handing the OCR engine a renamed text or PDF file.
#[must_use]
pub fn validate_image_format(content: &[u8], extension: &str) -> bool {
    match extension.to_lowercase().as_str() {
        "png" => content.starts_with(b"\x89PNG\r\n\x1a\n"),
        "jpg" | "jpeg" => content.starts_with(&[0xFF, 0xD8, 0xFF]),
        "tif" | "tiff" => content.starts_with(b"II*\0") || content.starts_with(b"MM\0*"),
        _ => false,
    }
}

/// Validate an image path before it is handed to an OCR engine.
///
/// Checks that the path is non-empty, exists, has a supported extension and
/// starts with the matching file signature.
///
/// # Errors
///
/// Returns the first `ValidationError` found.
pub fn validate_image_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath);
    }

    if !path.is_file() {
        return Err(ValidationError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_string();
    if !has_image_extension(path) {
        return Err(ValidationError::UnsupportedExtension(extension));
    }

    let mut header = Vec::with_capacity(8);
    std::fs::File::open(path)?.take(8).read_to_end(&mut header)?;
    if !validate_image_format(&header, &extension) {
        return Err(ValidationError::InvalidImageContent(extension));
    }

    Ok(())
}
