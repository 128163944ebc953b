//! Address matching: scorers and the composite ranker.
//!
//! This module provides the core matching functionality:
//!
//! - [`sequence`]: Longest common subsequence length
//! - [`substring`]: Longest common substring length
//! - [`scoring`]: [`BoostPolicy`] and per-candidate [`CandidateScore`]
//! - [`engine`]: [`rank_candidates`] and [`MatchingEngine`]
//!
//! ## Scoring
//!
//! For each candidate the composite score is
//!
//! ```text
//! composite = lcs(text, candidate) + boost(lcsubstr(text, candidate))
//! ```
//!
//! where `boost` multiplies runs longer than 6 characters by 4 and runs of
//! 4 to 6 characters by 2. Runs of 3 or fewer count at face value, so a long
//! intact fragment of the address outweighs scattered matching characters.
//!
//! ## Ranking
//!
//! Candidates are scored in list order against a running maximum that
//! starts at zero. Every candidate equal to the maximum joins the tie set;
//! a higher score replaces it. All scoring functions are total: empty
//! strings score zero and an empty list yields an empty tie set.
//!
//! ## Example
//!
//! ```rust
//! use postal_ocr::matching::{rank_candidates, BoostPolicy};
//!
//! let candidates = ["123 MAIN STREET", "456 OAK AVE"];
//! let result = rank_candidates("I23 MAIN 5T", candidates, &BoostPolicy::default());
//! assert_eq!(result.ties[0].address, "123 MAIN STREET");
//! ```

pub mod engine;
pub mod scoring;
pub mod sequence;
pub mod substring;

pub use engine::{rank_candidates, MatchResult, MatchingEngine};
pub use scoring::{BoostPolicy, CandidateScore};
