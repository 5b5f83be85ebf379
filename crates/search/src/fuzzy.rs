//! Fuzzy matching and scoring.
//!
//! A candidate matches a query when every query character appears in the
//! candidate, in order, ignoring case. Matching characters earn points; runs
//! of consecutive matches, matches right after a path separator and matches
//! on a camel-case hump earn more.

use crate::error::{Result, SearchError};
use fuzzrank_core::config::{ScoringConfig, ScoringProfile};

/// Score of a candidate that does not contain the query.
///
/// Lower than every score a matching candidate can receive.
pub const NO_MATCH: i64 = i64::MIN;

/// Floor applied to every matching candidate's score.
pub const MIN_MATCH_SCORE: i64 = 1;

const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Tunable scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Points for every matched character
    pub base: i64,
    /// Multiplied by the length of the current run on every match
    pub consecutive_step: i64,
    /// Match immediately after a path separator
    pub boundary_bonus: i64,
    /// Match on an uppercase character that follows a lowercase one
    pub camel_bonus: i64,
    /// One point is subtracted per this many characters of text; 0 disables
    pub length_penalty_divisor: i64,
    /// Score of every candidate when the query is empty
    pub empty_query_score: i64,
}

impl ScoreWeights {
    /// Default weights: boundary > camel-case > consecutive.
    pub const BALANCED: Self = Self {
        base: 10,
        consecutive_step: 5,
        boundary_bonus: 50,
        camel_bonus: 30,
        length_penalty_divisor: 4,
        empty_query_score: 1000,
    };

    /// Plain streak scoring without positional bonuses or length penalty.
    pub const STREAK: Self = Self {
        base: 5,
        consecutive_step: 1,
        boundary_bonus: 0,
        camel_bonus: 0,
        length_penalty_divisor: 0,
        empty_query_score: 1000,
    };

    /// Weights of a named profile.
    pub fn for_profile(profile: ScoringProfile) -> Self {
        match profile {
            ScoringProfile::Balanced => Self::BALANCED,
            ScoringProfile::Streak => Self::STREAK,
        }
    }

    /// Start from the configured profile and apply individual overrides.
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        let mut weights = Self::for_profile(config.profile);
        if let Some(v) = config.base {
            weights.base = v;
        }
        if let Some(v) = config.consecutive_step {
            weights.consecutive_step = v;
        }
        if let Some(v) = config.boundary_bonus {
            weights.boundary_bonus = v;
        }
        if let Some(v) = config.camel_bonus {
            weights.camel_bonus = v;
        }
        if let Some(v) = config.length_penalty_divisor {
            weights.length_penalty_divisor = v;
        }
        if let Some(v) = config.empty_query_score {
            weights.empty_query_score = v;
        }
        weights.validate()?;
        Ok(weights)
    }

    /// Reject weights that would break the score invariants.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("base", self.base),
            ("consecutive_step", self.consecutive_step),
            ("boundary_bonus", self.boundary_bonus),
            ("camel_bonus", self.camel_bonus),
            ("length_penalty_divisor", self.length_penalty_divisor),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| *v < 0) {
            return Err(SearchError::InvalidWeights(format!("{} must not be negative", name)));
        }
        if self.empty_query_score < MIN_MATCH_SCORE {
            return Err(SearchError::InvalidWeights(format!(
                "empty_query_score must be at least {}",
                MIN_MATCH_SCORE
            )));
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// Case-fold a single character.
///
/// Characters whose lowercase form expands to several characters fold to the
/// first of them.
pub fn fold(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Check if text contains all characters of query in order, ignoring case.
///
/// # Arguments
/// * `text` - Text to search in
/// * `query` - Query characters to find
///
/// # Returns
/// true if all query characters are found in order
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut text_chars = text.chars().map(fold);

    for query_char in query.chars().map(fold) {
        loop {
            match text_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }

    true
}

/// Scores candidates against one query.
#[derive(Debug, Clone)]
pub struct FuzzyScorer {
    query: Vec<char>,
    weights: ScoreWeights,
}

impl FuzzyScorer {
    /// Fold the query once; every call to [`score`](Self::score) reuses it.
    pub fn new(query: &str, weights: ScoreWeights) -> Self {
        Self {
            query: query.chars().map(fold).collect(),
            weights,
        }
    }

    /// Score `text`, or [`NO_MATCH`] when the query is not a subsequence of it.
    ///
    /// A matching text always scores at least [`MIN_MATCH_SCORE`].
    pub fn score(&self, text: &str) -> i64 {
        if self.query.is_empty() {
            return self.weights.empty_query_score;
        }

        let w = &self.weights;
        let mut score: i64 = 0;
        let mut run: i64 = 0;
        let mut cursor = 0;
        let mut prev: Option<char> = None;
        let mut length: i64 = 0;

        for c in text.chars() {
            length += 1;
            if cursor < self.query.len() && fold(c) == self.query[cursor] {
                run += 1;
                score = score
                    .saturating_add(w.base)
                    .saturating_add(run.saturating_mul(w.consecutive_step))
                    .saturating_add(positional_bonus(prev, c, w));
                cursor += 1;
            } else {
                run = 0;
            }
            prev = Some(c);
        }

        if cursor < self.query.len() {
            return NO_MATCH;
        }

        if w.length_penalty_divisor > 0 {
            score = score.saturating_sub(length / w.length_penalty_divisor);
        }

        score.max(MIN_MATCH_SCORE)
    }
}

/// One-time bonus for where a match lands; boundary wins over camel-case.
fn positional_bonus(prev: Option<char>, current: char, weights: &ScoreWeights) -> i64 {
    let Some(prev) = prev else {
        return 0;
    };
    if PATH_SEPARATORS.contains(&prev) {
        weights.boundary_bonus
    } else if prev.is_lowercase() && current.is_uppercase() {
        weights.camel_bonus
    } else {
        0
    }
}
