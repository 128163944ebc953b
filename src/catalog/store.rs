use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::address::CandidateAddress;
use crate::parsing::{self, LoadOptions, ParseError, SourceFormat};
use crate::utils::validation::check_address_limit;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read address list: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse address catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to load address list: {0}")]
    SourceError(#[from] ParseError),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub addresses: Vec<String>,
}

/// The ordered list of candidate addresses matched against.
///
/// Order is significant: tied candidates are reported in list order.
/// Duplicates are kept as loaded.
#[derive(Debug, Clone, Default)]
pub struct AddressCatalog {
    addresses: Vec<CandidateAddress>,

    /// Where the list was loaded from (if known)
    pub source: Option<String>,
}

impl AddressCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a file, choosing the loader from its extension.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read,
    /// `CatalogError::ParseError` for malformed JSON catalogs, or
    /// `CatalogError::SourceError` if the spreadsheet or text loader fails.
    pub fn load_from_file(path: &Path, options: &LoadOptions) -> Result<Self, CatalogError> {
        let format = SourceFormat::detect(path);
        debug!(path = %path.display(), ?format, "loading address list");

        let mut catalog = match format {
            SourceFormat::Json => {
                let content = std::fs::read_to_string(path)?;
                Self::from_json(&content)?
            }
            _ => {
                let addresses = parsing::load_addresses(path, format, options)?;
                Self::from_addresses(addresses)
            }
        };

        catalog.source = Some(path.display().to_string());
        Ok(catalog)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON is malformed, or
    /// `CatalogError::SourceError` if it holds too many addresses.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "address catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for raw in &data.addresses {
            if check_address_limit(catalog.len()).is_some() {
                return Err(ParseError::TooManyAddresses(catalog.len()).into());
            }
            match CandidateAddress::new(raw) {
                Some(address) => catalog.push(address),
                None => debug!("skipping blank address in catalog JSON"),
            }
        }
        catalog.source = data.source;

        Ok(catalog)
    }

    #[must_use]
    pub fn from_addresses(addresses: Vec<CandidateAddress>) -> Self {
        Self {
            addresses,
            source: None,
        }
    }

    /// Append an address to the end of the list
    pub fn push(&mut self, address: CandidateAddress) {
        self.addresses.push(address);
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            source: self.source.clone(),
            addresses: self.addresses.iter().map(|a| a.as_str().to_string()).collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Addresses in list order
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateAddress> {
        self.addresses.iter()
    }

    #[must_use]
    pub fn addresses(&self) -> &[CandidateAddress] {
        &self.addresses
    }

    /// Number of addresses in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl FromIterator<CandidateAddress> for AddressCatalog {
    fn from_iter<T: IntoIterator<Item = CandidateAddress>>(iter: T) -> Self {
        Self::from_addresses(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AddressCatalog {
    type Item = &'a CandidateAddress;
    type IntoIter = std::slice::Iter<'a, CandidateAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}
