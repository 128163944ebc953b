//! Core data types for address matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CandidateAddress`]: A normalized entry from the reference address list
//! - [`RecognizedText`]: The uppercased, concatenated output of one OCR pass
//! - [`ReadMode`], [`Decoder`]: OCR read configuration selectors
//!
//! ## Normalization
//!
//! Both sides of a comparison are uppercase before scoring. Candidate
//! addresses are additionally whitespace-collapsed and built from non-empty
//! fields joined by single spaces:
//!
//! | Source row | Candidate |
//! |------------|-----------|
//! | `12`, `Main St`, *(blank)*, `Springfield` | `12 MAIN ST SPRINGFIELD` |
//! | `  4b `, `oak   ave` | `4B OAK AVE` |
//!
//! Recognized text keeps OCR lines back to back with no separator, so
//! `["12 Main", "St"]` becomes `12 MAINST`.

pub mod address;
pub mod text;
pub mod types;
