use std::path::Path;

use crate::core::address::CandidateAddress;
use crate::parsing::ParseError;
use crate::utils::validation::check_address_limit;

/// Parse a plain address list: one address per line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_list_file(path: &Path) -> Result<Vec<CandidateAddress>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_list_text(&content)
}

/// Parse plain address list text.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `ParseError::TooManyAddresses` if the limit is exceeded.
pub fn parse_list_text(text: &str) -> Result<Vec<CandidateAddress>, ParseError> {
    let mut addresses = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if check_address_limit(addresses.len()).is_some() {
            return Err(ParseError::TooManyAddresses(addresses.len()));
        }

        if let Some(address) = CandidateAddress::new(line) {
            addresses.push(address);
        }
    }

    Ok(addresses)
}
