use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::core::types::{Decoder, ReadMode};
use crate::ocr::{finish_lines, preprocess, OcrError, ReadOptions, TextRecognizer};

/// Default program name looked up on `PATH`
pub const DEFAULT_PROGRAM: &str = "tesseract";

/// Runs the `tesseract` command-line engine for each image.
///
/// Quick reads pass the image unchanged. Accurate reads pass a grayscale
/// copy, whitelist [`crate::ocr::ALLOWLIST`] and select the LSTM engine,
/// which decodes with a beam search instead of the legacy greedy pass.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    program: OsString,
    language: Option<String>,
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl TesseractRecognizer {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            language: None,
        }
    }

    /// Select a trained language (tesseract `-l`)
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Command-line arguments for one recognition run
    #[must_use]
    pub fn build_args(&self, image: &Path, options: &ReadOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![image.as_os_str().to_owned(), "stdout".into()];

        if let Some(language) = &self.language {
            args.push("-l".into());
            args.push(language.into());
        }

        if options.decoder == Decoder::WordBeamSearch {
            args.push("--oem".into());
            args.push("1".into());
        }

        if let Some(allowlist) = options.allowlist {
            args.push("-c".into());
            args.push(format!("tessedit_char_whitelist={allowlist}").into());
        }

        args
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &Path, mode: ReadMode) -> Result<Vec<String>, OcrError> {
        let options = ReadOptions::for_mode(mode);

        // Held until the command finishes; dropping it deletes the file
        let grayscale = if options.grayscale {
            Some(preprocess::grayscale_copy(image)?)
        } else {
            None
        };
        let input = grayscale.as_ref().map_or(image, |file| file.path());

        let args = self.build_args(input, &options);
        debug!(program = ?self.program, ?args, %mode, "running OCR");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| OcrError::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::CommandFailed {
                program: self.program.to_string_lossy().into_owned(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(finish_lines(&stdout, &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::ALLOWLIST;

    #[test]
    fn test_quick_args() {
        let recognizer = TesseractRecognizer::default();
        let args = recognizer.build_args(
            Path::new("scan.png"),
            &ReadOptions::for_mode(ReadMode::Quick),
        );
        assert_eq!(args, vec![OsString::from("scan.png"), OsString::from("stdout")]);
    }

    #[test]
    fn test_accurate_args() {
        let recognizer = TesseractRecognizer::default().with_language("eng");
        let args = recognizer.build_args(
            Path::new("gray.png"),
            &ReadOptions::for_mode(ReadMode::Accurate),
        );
        let expected: Vec<OsString> = vec![
            "gray.png".into(),
            "stdout".into(),
            "-l".into(),
            "eng".into(),
            "--oem".into(),
            "1".into(),
            "-c".into(),
            format!("tessedit_char_whitelist={ALLOWLIST}").into(),
        ];
        assert_eq!(args, expected);
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("scan.png");
        image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]))
            .save(&image)
            .unwrap();

        let recognizer = TesseractRecognizer::new("postal-ocr-no-such-ocr-binary");
        let result = recognizer.recognize(&image, ReadMode::Quick);
        assert!(matches!(result, Err(OcrError::Launch { .. })));
    }
}
