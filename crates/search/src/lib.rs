//! Fuzzy ranking of candidate lines.
//!
//! This crate provides:
//! - Case-insensitive subsequence matching
//! - Streak, path-boundary and camel-case aware scoring
//! - A bounded-buffer line reader for candidate streams
//! - Stable ranking of the matches
//!
//! ```
//! use fuzzrank_search::{Ranker, ScoreWeights};
//!
//! let ranker = Ranker::new("bar", ScoreWeights::default());
//! let results = ranker.rank_lines(["foobar.c", "foo/bar.c", "baz.c"]);
//!
//! assert_eq!(results[0].text, "foo/bar.c");
//! assert_eq!(results.len(), 2);
//! ```

mod error;
mod fuzzy;
mod input;
mod ranking;

pub use error::{Result, SearchError};
pub use fuzzy::{fold, fuzzy_match, FuzzyScorer, ScoreWeights, MIN_MATCH_SCORE, NO_MATCH};
pub use input::{
    Candidate, CandidateReader, OverlongPolicy, ReadStats, ReaderOptions, DEFAULT_MAX_LINE_LENGTH,
};
pub use ranking::{rank_reader, Ranker, Ranking, ScoredCandidate};
