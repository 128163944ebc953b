use serde::{Deserialize, Serialize};

/// A normalized entry from the reference address list.
///
/// Candidates are created once when the list is loaded and never change
/// afterwards. The inner string is always uppercase, contains no leading,
/// trailing or repeated whitespace, and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateAddress(String);

impl CandidateAddress {
    /// Normalize a single free-form address string.
    ///
    /// Returns `None` when nothing but whitespace remains.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        Self::from_fields([raw])
    }

    /// Build an address from row fields, omitting empty ones.
    ///
    /// Each field is uppercased and whitespace-collapsed, then the surviving
    /// fields are joined with single spaces.
    ///
    /// ```
    /// use postal_ocr::CandidateAddress;
    ///
    /// let addr = CandidateAddress::from_fields(["12", " main  st", "", "Springfield"]).unwrap();
    /// assert_eq!(addr.as_str(), "12 MAIN ST SPRINGFIELD");
    /// ```
    pub fn from_fields<I, S>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = String::new();

        for field in fields {
            for word in field.as_ref().split_whitespace() {
                if !normalized.is_empty() {
                    normalized.push(' ');
                }
                normalized.push_str(&word.to_uppercase());
            }
        }

        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (the unit the scorers count in)
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CandidateAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
