use std::io::Read;
use std::path::Path;

use crate::core::address::CandidateAddress;
use crate::parsing::{address_from_row, LoadOptions, ParseError};
use crate::utils::validation::check_address_limit;

/// Parse a CSV/TSV address file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_delimited_file(
    path: &Path,
    delimiter: u8,
    options: &LoadOptions,
) -> Result<Vec<CandidateAddress>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_delimited_reader(file, delimiter, options)
}

/// Parse CSV/TSV text where each record holds one address spread over columns.
///
/// # Errors
///
/// Returns `ParseError::Delimited` on malformed records, or
/// `ParseError::TooManyAddresses` if the limit is exceeded.
pub fn parse_delimited_text(
    text: &str,
    delimiter: u8,
    options: &LoadOptions,
) -> Result<Vec<CandidateAddress>, ParseError> {
    parse_delimited_reader(text.as_bytes(), delimiter, options)
}

fn parse_delimited_reader<R: Read>(
    reader: R,
    delimiter: u8,
    options: &LoadOptions,
) -> Result<Vec<CandidateAddress>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .from_reader(reader);

    let mut addresses = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;

        if check_address_limit(addresses.len()).is_some() {
            return Err(ParseError::TooManyAddresses(addresses.len()));
        }

        let fields = record.iter().take(options.columns).map(|field| {
            let trimmed = field.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        });

        // Row numbers in logs are 1-based for user friendliness
        if let Some(address) = address_from_row(fields, i + 1) {
            addresses.push(address);
        }
    }

    Ok(addresses)
}
