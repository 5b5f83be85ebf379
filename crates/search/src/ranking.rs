//! Ranking of scored candidates.
//!
//! Non-matching candidates are dropped, the rest are sorted by descending
//! score. The sort is stable, so candidates with equal scores keep their
//! input order.

use crate::error::Result;
use crate::fuzzy::{FuzzyScorer, ScoreWeights, NO_MATCH};
use crate::input::{Candidate, CandidateReader, ReadStats, ReaderOptions};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A matching candidate with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Position of the candidate in the input
    pub index: usize,
    /// The candidate text
    pub text: String,
    /// Match score (higher is better, always positive)
    pub score: i64,
}

/// Scores candidates against a query and orders the matches.
#[derive(Debug, Clone)]
pub struct Ranker {
    scorer: FuzzyScorer,
    limit: Option<usize>,
}

impl Ranker {
    /// Rank against `query` without a result limit.
    pub fn new(query: &str, weights: ScoreWeights) -> Self {
        Self {
            scorer: FuzzyScorer::new(query, weights),
            limit: None,
        }
    }

    /// Keep only the best `limit` results.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Score one candidate; `None` if it does not match.
    pub fn score(&self, candidate: Candidate) -> Option<ScoredCandidate> {
        let score = self.scorer.score(&candidate.text);
        (score != NO_MATCH).then(|| ScoredCandidate {
            index: candidate.index,
            text: candidate.text,
            score,
        })
    }

    /// Rank already-read candidates.
    pub fn rank<I>(&self, candidates: I) -> Vec<ScoredCandidate>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut results: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| self.score(candidate))
            .collect();
        self.order(&mut results);
        results
    }

    /// Rank plain strings, indexed by their position.
    pub fn rank_lines<'a, I>(&self, lines: I) -> Vec<ScoredCandidate>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.rank(lines.into_iter().enumerate().map(|(index, text)| Candidate {
            index,
            text: text.to_string(),
            truncated: false,
        }))
    }

    fn order(&self, results: &mut Vec<ScoredCandidate>) {
        // stable: ties stay in input order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }
    }
}

/// Outcome of ranking a whole input stream.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Matches, best first
    pub results: Vec<ScoredCandidate>,
    pub stats: ReadStats,
}

/// Read every candidate from `reader`, then score, filter and sort them.
///
/// The whole stream is consumed before sorting, so memory grows with the
/// number of matching candidates.
pub fn rank_reader<R: BufRead>(
    reader: R,
    ranker: &Ranker,
    options: &ReaderOptions,
) -> Result<Ranking> {
    options.validate()?;

    let mut candidates = CandidateReader::new(reader, *options);
    let mut results = Vec::new();
    for candidate in candidates.by_ref() {
        if let Some(scored) = ranker.score(candidate?) {
            results.push(scored);
        }
    }

    let stats = candidates.stats();
    tracing::debug!(
        lines = stats.lines,
        matched = results.len(),
        truncated = stats.truncated,
        skipped = stats.skipped,
        "Scored candidates"
    );

    ranker.order(&mut results);
    Ok(Ranking { results, stats })
}
