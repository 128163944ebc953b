use serde::{Deserialize, Serialize};

/// Which OCR read to run for an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadMode {
    /// Single pass over the original image with default decoding
    Quick,
    /// Grayscale image, restricted character set and beam-search decoding
    Accurate,
}

impl std::fmt::Display for ReadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quick => write!(f, "Quick Read"),
            Self::Accurate => write!(f, "Slow Accurate Read"),
        }
    }
}

/// Decoding strategy requested from the OCR engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoder {
    Greedy,
    WordBeamSearch,
}

impl std::fmt::Display for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::WordBeamSearch => write!(f, "word beam search"),
        }
    }
}
