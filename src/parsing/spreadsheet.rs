use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::core::address::CandidateAddress;
use crate::parsing::{address_from_row, LoadOptions, ParseError};
use crate::utils::validation::check_address_limit;

/// Parse the first worksheet of a spreadsheet into addresses.
///
/// # Errors
///
/// Returns `ParseError::Spreadsheet` if the workbook cannot be opened or read,
/// `ParseError::InvalidFormat` if it has no worksheets, or
/// `ParseError::TooManyAddresses` if the limit is exceeded.
pub fn parse_spreadsheet_file(
    path: &Path,
    options: &LoadOptions,
) -> Result<Vec<CandidateAddress>, ParseError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        ParseError::InvalidFormat(format!("{} has no worksheets", path.display()))
    })??;

    parse_range(&range, options)
}

/// Parse a worksheet range, one address per row.
///
/// Column positions are absolute: a sheet whose used range starts at column
/// C still only contributes columns A..`options.columns`.
///
/// # Errors
///
/// Returns `ParseError::TooManyAddresses` if the limit is exceeded.
pub fn parse_range(
    range: &Range<Data>,
    options: &LoadOptions,
) -> Result<Vec<CandidateAddress>, ParseError> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let usable_columns = options.columns.saturating_sub(start_col as usize);
    let skip = usize::from(options.has_header);

    let mut addresses = Vec::new();

    for (i, row) in range.rows().enumerate().skip(skip) {
        if check_address_limit(addresses.len()).is_some() {
            return Err(ParseError::TooManyAddresses(addresses.len()));
        }

        let fields = row.iter().take(usable_columns).map(cell_text);
        if let Some(address) = address_from_row(fields, start_row as usize + i + 1) {
            addresses.push(address);
        }
    }

    Ok(addresses)
}

/// Text of a cell, or `None` for placeholders.
///
/// Empty cells, error cells and numeric zero (the fill value exported for
/// blank fields) are placeholders. Whole-number floats drop their fraction so
/// a house number stored as `12.0` reads as `12`.
#[must_use]
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::Int(0) => None,
        Data::Int(n) => Some(n.to_string()),
        Data::Float(f) if *f == 0.0 => None,
        #[allow(clippy::cast_possible_truncation)]
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some((*f as i64).to_string()),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}
