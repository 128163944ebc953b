use std::path::{Path, PathBuf};

use crate::core::types::ReadMode;
use crate::ocr::{finish_lines, OcrError, ReadOptions, TextRecognizer};

/// Reads text recognized ahead of time by another tool.
///
/// For an image `scan.png` the transcript is `scan.png.txt` next to it, one
/// recognized line per line. The accurate mode applies the same character
/// allowlist a live engine would.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptRecognizer;

impl TranscriptRecognizer {
    /// Sidecar transcript location for an image
    #[must_use]
    pub fn transcript_path(image: &Path) -> PathBuf {
        let mut path = image.as_os_str().to_owned();
        path.push(".txt");
        PathBuf::from(path)
    }
}

impl TextRecognizer for TranscriptRecognizer {
    fn recognize(&self, image: &Path, mode: ReadMode) -> Result<Vec<String>, OcrError> {
        let path = Self::transcript_path(image);
        if !path.is_file() {
            return Err(OcrError::MissingTranscript(path));
        }

        let raw = std::fs::read_to_string(&path)?;
        Ok(finish_lines(&raw, &ReadOptions::for_mode(mode)))
    }
}
