use serde::{Deserialize, Serialize};

/// The text recognized in one image, ready for scoring.
///
/// Built from the OCR engine's lines by uppercasing each line and
/// concatenating them with no separator. Created per scan and discarded
/// after one matching pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecognizedText(String);

impl RecognizedText {
    /// Uppercase a single string as-is
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().to_uppercase())
    }

    /// Concatenate OCR lines into one uppercase string
    ///
    /// ```
    /// use postal_ocr::RecognizedText;
    ///
    /// let text = RecognizedText::from_lines(["123 Main", "St"]);
    /// assert_eq!(text.as_str(), "123 MAINST");
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for line in lines {
            text.push_str(&line.as_ref().to_uppercase());
        }
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for RecognizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecognizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_no_separator() {
        let text = RecognizedText::from_lines(vec!["John Smith", "12 Elm Rd", "Leeds"]);
        assert_eq!(text.as_str(), "JOHN SMITH12 ELM RDLEEDS");
    }

    #[test]
    fn test_from_lines_empty() {
        let lines: Vec<String> = Vec::new();
        let text = RecognizedText::from_lines(lines);
        assert!(text.is_empty());
        assert_eq!(text.char_len(), 0);
    }

    #[test]
    fn test_new_keeps_whitespace() {
        let text = RecognizedText::new("  po box 9 ");
        assert_eq!(text.as_str(), "  PO BOX 9 ");
    }
}
