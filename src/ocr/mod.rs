//! OCR collaborator boundary.
//!
//! The matcher only needs recognized text lines for an image. Everything
//! about how those lines are produced lives behind [`TextRecognizer`]:
//!
//! - [`TesseractRecognizer`]: runs the `tesseract` command-line engine
//! - [`TranscriptRecognizer`]: reads a sidecar transcript written by another tool
//!
//! ## Read modes
//!
//! | Mode | Image | Character set | Decoder |
//! |------|-------|---------------|---------|
//! | [`ReadMode::Quick`] | as supplied | unrestricted | greedy |
//! | [`ReadMode::Accurate`] | grayscale copy | [`ALLOWLIST`] | word beam search |
//!
//! The recognizer is a long-lived handle: construct it once and pass it by
//! reference to every scan.

pub mod preprocess;
pub mod tesseract;
pub mod transcript;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::{Decoder, ReadMode};

pub use tesseract::TesseractRecognizer;
pub use transcript::TranscriptRecognizer;

/// Characters kept by the accurate read mode
pub const ALLOWLIST: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ,- +&";

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image preprocessing failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to run OCR command '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR command '{program}' failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("No transcript found for image (expected {0})")]
    MissingTranscript(PathBuf),
}

/// Converts an image into recognized text lines
pub trait TextRecognizer {
    /// Recognize the text lines in `image` using the given read mode.
    ///
    /// Lines are returned as the engine produced them; uppercasing and
    /// concatenation happen in [`crate::core::text::RecognizedText`].
    ///
    /// # Errors
    ///
    /// Returns an `OcrError` if the image cannot be read or the engine fails.
    fn recognize(&self, image: &Path, mode: ReadMode) -> Result<Vec<String>, OcrError>;
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for &T {
    fn recognize(&self, image: &Path, mode: ReadMode) -> Result<Vec<String>, OcrError> {
        (**self).recognize(image, mode)
    }
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for Box<T> {
    fn recognize(&self, image: &Path, mode: ReadMode) -> Result<Vec<String>, OcrError> {
        (**self).recognize(image, mode)
    }
}

/// Preprocessing and decoding settings for one read mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Convert the image to grayscale before recognition
    pub grayscale: bool,

    /// Restrict recognized characters to this set
    pub allowlist: Option<&'static str>,

    /// Decoding strategy
    pub decoder: Decoder,
}

impl ReadOptions {
    #[must_use]
    pub fn for_mode(mode: ReadMode) -> Self {
        match mode {
            ReadMode::Quick => Self {
                grayscale: false,
                allowlist: None,
                decoder: Decoder::Greedy,
            },
            ReadMode::Accurate => Self {
                grayscale: true,
                allowlist: Some(ALLOWLIST),
                decoder: Decoder::WordBeamSearch,
            },
        }
    }
}

/// Split raw engine output into trimmed, non-empty lines.
///
/// When the read options carry an allowlist, characters outside it are
/// removed first. Engines that ignore their whitelist setting still end up
/// with the restricted character set.
#[must_use]
pub fn finish_lines(raw: &str, options: &ReadOptions) -> Vec<String> {
    raw.lines()
        .map(|line| match options.allowlist {
            Some(allowlist) => preprocess::apply_allowlist(line, allowlist),
            None => line.to_string(),
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
