//! Command-line interface for postal-ocr.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **scan**: Read address images with OCR and predict the address
//! - **text**: Match already-recognized text against the address list
//! - **score**: Show the score breakdown for one text/address pair
//! - **addresses**: List or export the loaded address list
//!
//! ## Usage
//!
//! ```text
//! # Quick read of two images against a spreadsheet of addresses
//! postal-ocr scan letter1.png letter2.jpg --addresses NAD-BH.xlsx --mode quick
//!
//! # Slower, grayscale + restricted character set read
//! postal-ocr scan parcel.tiff --addresses NAD-BH.xlsx --mode accurate
//!
//! # Text from another OCR tool, via stdin
//! cat ocr.txt | postal-ocr text - --addresses addresses.csv --format json
//!
//! # Why did this address score what it did?
//! postal-ocr score "I23 MA1N ST" "123 MAIN STREET"
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::store::AddressCatalog;
use crate::parsing::LoadOptions;

pub mod addresses;
pub mod report;
pub mod scan;
pub mod score;
pub mod text;

#[derive(Parser)]
#[command(name = "postal-ocr")]
#[command(version)]
#[command(about = "Predict the postal address in an image from a reference address list")]
#[command(
    long_about = "postal-ocr reads the text on a letter or parcel image with OCR and matches it against a list of known addresses.\n\nOCR output is noisy, so every address is scored by how much of it appears in the recognized text:\n- Longest common subsequence for scattered matching characters\n- Longest common substring, boosted, for long intact runs\n\nAll addresses tied at the best score are reported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read images with OCR and predict their addresses
    Scan(scan::ScanArgs),

    /// Match recognized text against the address list
    Text(text::TextArgs),

    /// Score one text against one address
    Score(score::ScoreArgs),

    /// Inspect or export the address list
    Addresses(addresses::AddressesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where candidate addresses come from
#[derive(Args, Debug, Clone)]
pub struct AddressListArgs {
    /// Reference address list (xlsx/xls/ods, csv, tsv, json, or one address per line)
    #[arg(short, long, required = true)]
    pub addresses: PathBuf,

    /// Number of leading columns that make up an address (spreadsheets and csv/tsv)
    #[arg(long, default_value = "6", value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// The first row holds data, not column headers
    #[arg(long)]
    pub no_header: bool,
}

impl AddressListArgs {
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            columns: usize::from(self.columns),
            has_header: !self.no_header,
        }
    }

    /// Load the address list, reporting its size when verbose
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be read or parsed.
    pub fn load(&self, verbose: bool) -> anyhow::Result<AddressCatalog> {
        let catalog = AddressCatalog::load_from_file(&self.addresses, &self.load_options())?;

        if verbose {
            eprintln!(
                "Loaded {} addresses from {}",
                catalog.len(),
                self.addresses.display()
            );
        }

        Ok(catalog)
    }
}
