//! Reference address list storage.
//!
//! The catalog is the ordered list of [`CandidateAddress`](crate::CandidateAddress)
//! values that recognized text is ranked against. It is loaded once at
//! startup and read-only afterwards.
//!
//! ## Loading
//!
//! ```rust,no_run
//! use postal_ocr::AddressCatalog;
//! use postal_ocr::parsing::LoadOptions;
//! use std::path::Path;
//!
//! // Spreadsheet, CSV/TSV, plain list or exported JSON, by extension
//! let path = Path::new("NAD-BH.xlsx");
//! let catalog = AddressCatalog::load_from_file(path, &LoadOptions::default()).unwrap();
//!
//! // Export the normalized list for faster reloads
//! std::fs::write("addresses.json", catalog.to_json().unwrap()).unwrap();
//! ```

pub mod store;
