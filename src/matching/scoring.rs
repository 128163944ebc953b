use serde::{Deserialize, Serialize};

use crate::matching::sequence::lcs_len_slices;
use crate::matching::substring::longest_common_substring_len_slices;

/// Non-linear reward for long contiguous runs.
///
/// A substring score above `strong_threshold` is multiplied by
/// `strong_multiplier`; otherwise a score above `good_threshold` is multiplied
/// by `good_multiplier`; anything else is left unchanged. The bands are
/// disjoint and the strong band is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostPolicy {
    pub strong_threshold: usize,
    pub strong_multiplier: usize,
    pub good_threshold: usize,
    pub good_multiplier: usize,
}

impl Default for BoostPolicy {
    fn default() -> Self {
        Self {
            strong_threshold: 6,
            strong_multiplier: 4,
            good_threshold: 3,
            good_multiplier: 2,
        }
    }
}

impl BoostPolicy {
    /// Multiplier of the band a raw substring score falls in, or `None`
    /// when it is left unchanged
    #[must_use]
    pub fn band(&self, substring_score: usize) -> Option<usize> {
        if substring_score > self.strong_threshold {
            Some(self.strong_multiplier)
        } else if substring_score > self.good_threshold {
            Some(self.good_multiplier)
        } else {
            None
        }
    }

    /// Apply the boost bands to a raw substring score
    #[must_use]
    pub fn apply(&self, substring_score: usize) -> usize {
        self.band(substring_score)
            .map_or(substring_score, |multiplier| substring_score.saturating_mul(multiplier))
    }
}

/// Scores for one (recognized text, candidate) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Longest common subsequence length
    pub sequence: usize,

    /// Longest common substring length, before boosting
    pub substring: usize,

    /// Substring score after the boost policy
    pub boosted_substring: usize,

    /// `sequence + boosted_substring`, the ranking key
    pub composite: usize,
}

impl CandidateScore {
    /// Score a candidate against recognized text
    #[must_use]
    pub fn calculate(text: &str, candidate: &str, policy: &BoostPolicy) -> Self {
        let text: Vec<char> = text.chars().collect();
        let candidate: Vec<char> = candidate.chars().collect();
        Self::calculate_chars(&text, &candidate, policy)
    }

    /// Score pre-split character sequences.
    ///
    /// The ranker splits the recognized text once and reuses it for every
    /// candidate.
    #[must_use]
    pub fn calculate_chars(text: &[char], candidate: &[char], policy: &BoostPolicy) -> Self {
        let sequence = lcs_len_slices(text, candidate);
        let substring = longest_common_substring_len_slices(text, candidate);
        Self::from_parts(sequence, substring, policy)
    }

    /// Combine an already computed score pair
    #[must_use]
    pub fn from_parts(sequence: usize, substring: usize, policy: &BoostPolicy) -> Self {
        let boosted_substring = policy.apply(substring);
        Self {
            sequence,
            substring,
            boosted_substring,
            composite: sequence.saturating_add(boosted_substring),
        }
    }
}
