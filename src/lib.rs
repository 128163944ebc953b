//! # postal-ocr
//!
//! A library for matching noisy OCR text from mail images against a
//! reference list of known addresses.
//!
//! OCR on envelopes and labels misreads characters, merges lines and picks up
//! stray text such as names and stamps. Instead of exact lookup, `postal-ocr`
//! scores every candidate address against the recognized text and returns
//! the set of candidates tied at the best score.
//!
//! ## Features
//!
//! - **Subsequence scoring**: Longest common subsequence tolerates dropped and misread characters
//! - **Substring scoring**: Longest common substring rewards long intact runs, with a non-linear boost
//! - **Tie sets**: Every candidate at the best score is returned, in list order
//! - **Address list loading**: Spreadsheets, CSV/TSV and plain lists, normalized on load
//! - **Pluggable OCR**: Any engine behind the [`ocr::TextRecognizer`] trait
//!
//! ## Example
//!
//! ```rust
//! use postal_ocr::{AddressCatalog, CandidateAddress, MatchingEngine, RecognizedText};
//!
//! let catalog: AddressCatalog = ["123 Main Street", "456 Oak Ave"]
//!     .into_iter()
//!     .filter_map(CandidateAddress::new)
//!     .collect();
//!
//! let text = RecognizedText::from_lines(["J SMITH", "123 MAIN ST"]);
//! let engine = MatchingEngine::new(&catalog);
//! let result = engine.find_matches(&text);
//!
//! for address in result.addresses() {
//!     println!("{address} (score {})", result.max_score);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The ordered candidate address list
//! - [`core`]: Core data types for addresses, recognized text and read modes
//! - [`matching`]: Subsequence/substring scorers and the composite ranker
//! - [`parsing`]: Address list loaders
//! - [`ocr`]: OCR engine boundary and preprocessing
//! - [`pipeline`]: Image-to-result orchestration
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod ocr;
pub mod parsing;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::AddressCatalog;
pub use core::address::CandidateAddress;
pub use core::text::RecognizedText;
pub use core::types::*;
pub use matching::engine::{rank_candidates, MatchResult, MatchingConfig, MatchingEngine};
pub use pipeline::{MatchPipeline, ScanOutcome};
