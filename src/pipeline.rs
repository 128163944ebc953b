//! One image in, ranked addresses out.
//!
//! [`MatchPipeline`] ties a long-lived [`TextRecognizer`] handle to a loaded
//! [`AddressCatalog`]. Each scan runs to completion before returning and
//! keeps no state between calls.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::store::AddressCatalog;
use crate::core::text::RecognizedText;
use crate::core::types::ReadMode;
use crate::matching::engine::{MatchResult, MatchingConfig, MatchingEngine};
use crate::ocr::{OcrError, TextRecognizer};
use crate::utils::validation::{validate_image_path, ValidationError};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    InvalidImage(#[from] ValidationError),

    #[error("OCR failed: {0}")]
    Recognition(#[from] OcrError),
}

/// Everything produced by one scan, handed to presentation
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// Image that was read (absent for raw text matches)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,

    /// Read mode used (absent for raw text matches)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ReadMode>,

    /// Text the candidates were ranked against
    pub recognized: RecognizedText,

    /// Tie set and maximum score
    pub result: MatchResult,
}

impl ScanOutcome {
    /// Rank text that was recognized elsewhere, with no image attached
    #[must_use]
    pub fn rank(engine: &MatchingEngine<'_>, recognized: RecognizedText) -> Self {
        let result = engine.find_matches(&recognized);

        info!(
            candidates = result.candidates_scored,
            ties = result.len(),
            max_score = result.max_score,
            "ranked candidates"
        );

        Self {
            image: None,
            mode: None,
            recognized,
            result,
        }
    }
}

/// Runs recognition and ranking for one image at a time
pub struct MatchPipeline<'a, R: TextRecognizer + ?Sized> {
    recognizer: &'a R,
    engine: MatchingEngine<'a>,
}

impl<'a, R: TextRecognizer + ?Sized> MatchPipeline<'a, R> {
    pub fn new(recognizer: &'a R, catalog: &'a AddressCatalog) -> Self {
        Self {
            recognizer,
            engine: MatchingEngine::new(catalog),
        }
    }

    pub fn with_config(
        recognizer: &'a R,
        catalog: &'a AddressCatalog,
        config: MatchingConfig,
    ) -> Self {
        Self {
            recognizer,
            engine: MatchingEngine::with_config(catalog, config),
        }
    }

    /// Read an image and rank the catalog against its text.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::InvalidImage` if the image is missing or not a
    /// supported image, or `ScanError::Recognition` if the OCR engine fails.
    pub fn scan(&self, image: &Path, mode: ReadMode) -> Result<ScanOutcome, ScanError> {
        validate_image_path(image)?;

        let lines = self.recognizer.recognize(image, mode)?;
        let recognized = RecognizedText::from_lines(&lines);

        info!(
            image = %image.display(),
            %mode,
            lines = lines.len(),
            chars = recognized.char_len(),
            "recognized text"
        );

        let mut outcome = self.match_text(recognized);
        outcome.image = Some(image.to_path_buf());
        outcome.mode = Some(mode);
        Ok(outcome)
    }

    /// Rank the catalog against text that was recognized elsewhere
    #[must_use]
    pub fn match_text(&self, recognized: RecognizedText) -> ScanOutcome {
        ScanOutcome::rank(&self.engine, recognized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::address::CandidateAddress;
    use std::cell::Cell;
    use std::io::Write;

    /// Returns fixed lines and counts calls
    struct FakeRecognizer {
        lines: Vec<String>,
        calls: Cell<usize>,
    }

    impl FakeRecognizer {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(ToString::to_string).collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl TextRecognizer for FakeRecognizer {
        fn recognize(&self, _image: &Path, _mode: ReadMode) -> Result<Vec<String>, OcrError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.lines.clone())
        }
    }

    struct FailingRecognizer;

    impl TextRecognizer for FailingRecognizer {
        fn recognize(&self, image: &Path, _mode: ReadMode) -> Result<Vec<String>, OcrError> {
            Err(OcrError::MissingTranscript(image.to_path_buf()))
        }
    }

    fn make_catalog() -> AddressCatalog {
        ["123 Main Street", "456 Oak Ave"]
            .into_iter()
            .filter_map(CandidateAddress::new)
            .collect()
    }

    fn make_png() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\n").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_scan_ranks_recognized_lines() {
        let catalog = make_catalog();
        let recognizer = FakeRecognizer::new(&["Jane Doe", "456 oak ave"]);
        let pipeline = MatchPipeline::new(&recognizer, &catalog);
        let image = make_png();

        let outcome = pipeline.scan(image.path(), ReadMode::Quick).unwrap();
        assert_eq!(outcome.recognized.as_str(), "JANE DOE456 OAK AVE");
        assert_eq!(outcome.result.addresses().collect::<Vec<_>>(), vec!["456 OAK AVE"]);
        assert_eq!(outcome.mode, Some(ReadMode::Quick));
        assert_eq!(outcome.image.as_deref(), Some(image.path()));
        assert_eq!(recognizer.calls.get(), 1);
    }

    #[test]
    fn test_scan_rejects_missing_image_before_ocr() {
        let catalog = make_catalog();
        let recognizer = FakeRecognizer::new(&["anything"]);
        let pipeline = MatchPipeline::new(&recognizer, &catalog);

        let result = pipeline.scan(Path::new("/nonexistent/scan.png"), ReadMode::Accurate);
        assert!(matches!(result, Err(ScanError::InvalidImage(_))));
        assert_eq!(recognizer.calls.get(), 0);
    }

    #[test]
    fn test_scan_reports_ocr_failure() {
        let catalog = make_catalog();
        let pipeline = MatchPipeline::new(&FailingRecognizer, &catalog);
        let image = make_png();

        let result = pipeline.scan(image.path(), ReadMode::Quick);
        assert!(matches!(result, Err(ScanError::Recognition(_))));
    }

    #[test]
    fn test_match_text_empty_catalog() {
        let catalog = AddressCatalog::new();
        let pipeline = MatchPipeline::new(&FailingRecognizer, &catalog);

        let outcome = pipeline.match_text(RecognizedText::new("123 main st"));
        assert!(outcome.result.is_empty());
        assert_eq!(outcome.result.max_score, 0);
        assert!(outcome.image.is_none());
    }

    #[test]
    fn test_rank_without_recognizer() {
        let catalog = make_catalog();
        let engine = MatchingEngine::new(&catalog);

        let outcome = ScanOutcome::rank(&engine, RecognizedText::from_lines(["456 oak", "ave"]));
        assert_eq!(outcome.recognized.as_str(), "456 OAKAVE");
        assert_eq!(outcome.result.ties[0].address, "456 OAK AVE");
        assert!(outcome.image.is_none());
        assert!(outcome.mode.is_none());
    }

    #[test]
    fn test_with_config_uses_boost_policy() {
        let catalog = make_catalog();
        let flat = MatchingConfig {
            boost: crate::matching::scoring::BoostPolicy {
                strong_threshold: usize::MAX,
                strong_multiplier: 1,
                good_threshold: usize::MAX,
                good_multiplier: 1,
            },
        };
        let pipeline = MatchPipeline::with_config(&FailingRecognizer, &catalog, flat);

        let outcome = pipeline.match_text(RecognizedText::new("123 main st"));
        assert_eq!(outcome.result.max_score, 11 + 11);
    }

    #[test]
    fn test_dyn_recognizer() {
        let catalog = make_catalog();
        let recognizer: Box<dyn TextRecognizer> = Box::new(FakeRecognizer::new(&["123 main st"]));
        let pipeline = MatchPipeline::new(recognizer.as_ref(), &catalog);
        let image = make_png();

        let outcome = pipeline.scan(image.path(), ReadMode::Quick).unwrap();
        assert_eq!(outcome.result.ties[0].address, "123 MAIN STREET");
    }

    #[test]
    fn test_outcome_serializes() {
        let catalog = make_catalog();
        let pipeline = MatchPipeline::new(&FailingRecognizer, &catalog);
        let outcome = pipeline.match_text(RecognizedText::new("123 main st"));

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["recognized"], "123 MAIN ST");
        assert_eq!(json["result"]["max_score"], 55);
        assert!(json.get("image").is_none());
    }
}
