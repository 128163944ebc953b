use std::path::PathBuf;

use clap::Args;

use crate::cli::report::{outcome_json, print_text_outcome, print_tsv_rows, TSV_HEADER};
use crate::cli::{AddressListArgs, OutputFormat};
use crate::core::types::ReadMode;
use crate::ocr::{TesseractRecognizer, TextRecognizer, TranscriptRecognizer};
use crate::pipeline::MatchPipeline;

/// Which read to run on each image
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ScanMode {
    /// Quick read of the image as supplied
    Quick,
    /// Slow accurate read: grayscale, restricted characters, beam-search decoding
    Accurate,
}

impl From<ScanMode> for ReadMode {
    fn from(mode: ScanMode) -> Self {
        match mode {
            ScanMode::Quick => Self::Quick,
            ScanMode::Accurate => Self::Accurate,
        }
    }
}

/// Where recognized text comes from
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OcrEngine {
    /// Run the tesseract command-line engine
    #[default]
    Tesseract,
    /// Read `<image>.txt` transcripts produced by another tool
    Transcript,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Images to read (png, jpg, jpeg, tif, tiff)
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Type of read to run
    #[arg(short, long, value_enum, required = true)]
    pub mode: ScanMode,

    #[command(flatten)]
    pub address_list: AddressListArgs,

    /// OCR engine
    #[arg(long, value_enum, default_value = "tesseract")]
    pub engine: OcrEngine,

    /// Path to the tesseract executable
    #[arg(long, default_value = "tesseract")]
    pub tesseract: PathBuf,

    /// Tesseract language (e.g. "eng")
    #[arg(long)]
    pub language: Option<String>,
}

/// Execute scan subcommand
///
/// Each image is processed to completion before the next. A failure on one
/// image is reported and the remaining images are still processed.
///
/// # Errors
///
/// Returns an error if the address list cannot be loaded, or after all
/// images are processed if any of them failed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.address_list.load(verbose)?;

    if catalog.is_empty() {
        eprintln!("Warning: Address list is empty, no addresses to match against.");
    }

    let recognizer: Box<dyn TextRecognizer> = match args.engine {
        OcrEngine::Tesseract => {
            let mut tesseract = TesseractRecognizer::new(args.tesseract.as_os_str());
            if let Some(language) = &args.language {
                tesseract = tesseract.with_language(language);
            }
            Box::new(tesseract)
        }
        OcrEngine::Transcript => Box::new(TranscriptRecognizer),
    };

    let pipeline = MatchPipeline::new(recognizer.as_ref(), &catalog);
    let mode = ReadMode::from(args.mode);
    let total = args.images.len();
    let mut failed = 0usize;
    let mut json_outcomes = Vec::new();

    if matches!(format, OutputFormat::Tsv) {
        println!("{TSV_HEADER}");
    }

    for (i, image) in args.images.iter().enumerate() {
        if matches!(format, OutputFormat::Text) {
            println!("Image Name: {}", image.display());
            println!("Reading image ({}/{total})...", i + 1);
        }

        match pipeline.scan(image, mode) {
            Ok(outcome) => match format {
                OutputFormat::Text => {
                    println!("{}", "─".repeat(60));
                    print_text_outcome(&outcome, verbose);
                }
                OutputFormat::Json => json_outcomes.push(outcome_json(&outcome)),
                OutputFormat::Tsv => print_tsv_rows(&outcome),
            },
            Err(e) => {
                failed += 1;
                eprintln!("ERROR: {}: {e}", image.display());
                if matches!(format, OutputFormat::Json) {
                    json_outcomes.push(serde_json::json!({
                        "image": image.display().to_string(),
                        "mode": mode,
                        "error": e.to_string(),
                    }));
                }
            }
        }

        if matches!(format, OutputFormat::Text) {
            println!("{}", "─".repeat(60));
        }
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&json_outcomes)?);
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} images could not be read");
    }

    Ok(())
}
