use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::store::AddressCatalog;
use crate::core::text::RecognizedText;
use crate::matching::scoring::{BoostPolicy, CandidateScore};

/// A candidate that reached the maximum composite score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedAddress {
    /// The candidate address string
    pub address: String,

    /// Zero-based position in the input candidate list
    pub position: usize,

    /// Score details
    pub score: CandidateScore,
}

/// Result of ranking one recognized text against a candidate list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Every candidate tied at `max_score`, in input list order
    pub ties: Vec<RankedAddress>,

    /// Highest composite score observed
    pub max_score: usize,

    /// Number of candidates scored
    pub candidates_scored: usize,
}

impl MatchResult {
    /// Tied addresses in input order
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.ties.iter().map(|t| t.address.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ties.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ties.len()
    }

    /// True when at least one candidate shares any character with the text.
    ///
    /// A result with ties but no overlap means every candidate scored zero
    /// and the whole list came back as tied.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        self.max_score > 0
    }
}

/// Rank candidates against recognized text and collect the tie set.
///
/// Candidates are scored in list order. A composite above the running
/// maximum replaces the tie set, an equal composite is appended to it, and a
/// lower one is dropped. The running maximum starts at zero with an empty
/// tie set, so zero-scoring candidates accumulate until something scores
/// higher. An empty candidate list yields an empty tie set and a maximum of
/// zero.
///
/// ```
/// use postal_ocr::matching::engine::rank_candidates;
/// use postal_ocr::matching::scoring::BoostPolicy;
///
/// let result = rank_candidates(
///     "123 MAIN ST",
///     ["123 MAIN STREET", "456 OAK AVE"],
///     &BoostPolicy::default(),
/// );
/// assert_eq!(result.addresses().collect::<Vec<_>>(), vec!["123 MAIN STREET"]);
/// ```
pub fn rank_candidates<I, S>(text: &str, candidates: I, policy: &BoostPolicy) -> MatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text_chars: Vec<char> = text.chars().collect();
    let mut result = MatchResult::default();

    for (position, candidate) in candidates.into_iter().enumerate() {
        let candidate = candidate.as_ref();
        let candidate_chars: Vec<char> = candidate.chars().collect();
        let score = CandidateScore::calculate_chars(&text_chars, &candidate_chars, policy);
        result.candidates_scored += 1;

        if score.composite > result.max_score {
            debug!(
                position,
                composite = score.composite,
                candidate,
                "new best candidate"
            );
            result.max_score = score.composite;
            result.ties.clear();
            result.ties.push(RankedAddress {
                address: candidate.to_string(),
                position,
                score,
            });
        } else if score.composite == result.max_score {
            result.ties.push(RankedAddress {
                address: candidate.to_string(),
                position,
                score,
            });
        }
    }

    if !result.is_empty() && !result.has_overlap() {
        warn!(
            ties = result.len(),
            "no candidate overlaps the recognized text; every candidate is tied at score 0"
        );
    }

    result
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Substring boost bands
    #[serde(default)]
    pub boost: BoostPolicy,
}

/// Ranks recognized text against a loaded address catalog
pub struct MatchingEngine<'a> {
    catalog: &'a AddressCatalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new(catalog: &'a AddressCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(catalog: &'a AddressCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Find every catalog address tied at the best composite score
    #[must_use]
    pub fn find_matches(&self, text: &RecognizedText) -> MatchResult {
        rank_candidates(text.as_str(), self.catalog.iter(), &self.config.boost)
    }
}
