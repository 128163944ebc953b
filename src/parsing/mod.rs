//! Loaders that turn a reference data source into candidate addresses.
//!
//! This module provides loaders for:
//!
//! - **Spreadsheets** (`.xlsx`, `.xlsm`, `.xls`, `.ods`): first worksheet, one address per row
//! - **Delimited text** (`.csv`, `.tsv`): one address per record
//! - **Plain lists** (`.txt` and anything else): one address per line
//!
//! Row-based sources read the first [`LoadOptions::columns`] columns, skip a
//! header row unless told otherwise, drop placeholder fields and join what is
//! left with single spaces (see [`CandidateAddress::from_fields`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use postal_ocr::parsing::{load_addresses, LoadOptions, SourceFormat};
//! use std::path::Path;
//!
//! let path = Path::new("NAD.xlsx");
//! let format = SourceFormat::detect(path);
//! let addresses = load_addresses(path, format, &LoadOptions::default()).unwrap();
//! println!("{} addresses", addresses.len());
//! ```

pub mod delimited;
pub mod list;
pub mod spreadsheet;

use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::address::CandidateAddress;
use crate::utils::validation::MAX_ADDRESSES;

/// Columns read from each row by default (A through F)
pub const DEFAULT_COLUMNS: usize = 6;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Delimited text error: {0}")]
    Delimited(#[from] csv::Error),

    #[error("Invalid address list: {0}")]
    InvalidFormat(String),

    #[error("Too many addresses: {0} exceeds maximum allowed ({MAX_ADDRESSES})")]
    TooManyAddresses(usize),
}

/// How row-based sources are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Number of leading columns that make up an address
    pub columns: usize,

    /// Whether the first row is a header to skip
    pub has_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            has_header: true,
        }
    }
}

/// Address list source format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Spreadsheet,
    Csv,
    Tsv,
    Json,
    List,
}

impl SourceFormat {
    /// Detect the source format from a file extension
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Self::Spreadsheet,
            Some("csv") => Self::Csv,
            Some("tsv") => Self::Tsv,
            Some("json") => Self::Json,
            _ => Self::List,
        }
    }
}

/// Load addresses from a row-based or line-based source.
///
/// # Errors
///
/// Returns the loader's `ParseError`. `SourceFormat::Json` is not a row
/// source and yields `ParseError::InvalidFormat`; load it through
/// [`crate::catalog::store::AddressCatalog`].
pub fn load_addresses(
    path: &Path,
    format: SourceFormat,
    options: &LoadOptions,
) -> Result<Vec<CandidateAddress>, ParseError> {
    let addresses = match format {
        SourceFormat::Spreadsheet => spreadsheet::parse_spreadsheet_file(path, options)?,
        SourceFormat::Csv => delimited::parse_delimited_file(path, b',', options)?,
        SourceFormat::Tsv => delimited::parse_delimited_file(path, b'\t', options)?,
        SourceFormat::List => list::parse_list_file(path)?,
        SourceFormat::Json => {
            return Err(ParseError::InvalidFormat(
                "JSON catalogs are not a row source".to_string(),
            ))
        }
    };

    debug!(count = addresses.len(), "loaded addresses");
    Ok(addresses)
}

/// Turn one row's fields into an address, dropping placeholders.
///
/// Rows with nothing left are logged and skipped.
pub(crate) fn address_from_row<I>(fields: I, row_num: usize) -> Option<CandidateAddress>
where
    I: IntoIterator<Item = Option<String>>,
{
    let address = CandidateAddress::from_fields(fields.into_iter().flatten());
    if address.is_none() {
        debug!(row = row_num, "skipping row with no address fields");
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(SourceFormat::detect(Path::new("NAD-BH.xlsx")), SourceFormat::Spreadsheet);
        assert_eq!(SourceFormat::detect(Path::new("list.ODS")), SourceFormat::Spreadsheet);
        assert_eq!(SourceFormat::detect(Path::new("list.csv")), SourceFormat::Csv);
        assert_eq!(SourceFormat::detect(Path::new("list.tsv")), SourceFormat::Tsv);
        assert_eq!(SourceFormat::detect(Path::new("catalog.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::detect(Path::new("addresses.txt")), SourceFormat::List);
        assert_eq!(SourceFormat::detect(Path::new("addresses")), SourceFormat::List);
    }

    #[test]
    fn test_address_from_row() {
        let fields = vec![
            Some("12".to_string()),
            None,
            Some("elm rd".to_string()),
        ];
        let address = address_from_row(fields, 1).unwrap();
        assert_eq!(address.as_str(), "12 ELM RD");

        assert!(address_from_row(vec![None, None], 2).is_none());
    }

    #[test]
    fn test_load_json_as_rows_is_rejected() {
        let result = load_addresses(
            Path::new("catalog.json"),
            SourceFormat::Json,
            &LoadOptions::default(),
        );
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
