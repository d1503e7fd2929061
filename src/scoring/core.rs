// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a word score.
//!
//! ```text
//! distance_score(q, w) = 1 / (levenshtein(q, w) + ε)
//! word_score(w)        = combine_q(distance_score(q, w))
//!                      + Σ over synonyms s of w: combine_q(distance_score(q, s))
//! ```
//!
//! `combine_q` folds the per-query-token values with a [`ScoringStrategy`].
//! The default, [`ScoringStrategy::Last`], keeps only the value of the last
//! query token: a two-word query is effectively scored on its second word.
//! That is long-standing ranking behaviour, so it stays the default; `Max`
//! and `Sum` are the alternatives.
//!
//! TF-IDF weights are computed at build time but ignored by default. Setting
//! [`WeightPolicy::Scale`] multiplies each word score by its weight, which
//! changes rankings.

use crate::fuzzy::levenshtein;
use crate::types::ModelWord;

/// Keeps an exact match finite: `1 / ε = 1_000_000`.
pub const EPSILON: f64 = 1e-6;

/// Score of an exact match.
pub const EXACT_MATCH_SCORE: f64 = 1.0 / EPSILON;

/// Inverse edit distance between a query token and a candidate word.
#[inline]
pub fn distance_score(query_token: &str, candidate: &str) -> f64 {
    1.0 / (levenshtein(query_token, candidate) as f64 + EPSILON)
}

/// How the per-query-token scores for one candidate are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringStrategy {
    /// Each token overwrites the previous value; the last token wins.
    #[default]
    Last,
    /// Best token wins.
    Max,
    /// All tokens add up.
    Sum,
}

impl ScoringStrategy {
    /// Combine `distance_score` over all query tokens. No tokens → 0.
    pub fn combine(self, query_tokens: &[String], candidate: &str) -> f64 {
        let mut scores = query_tokens.iter().map(|q| distance_score(q, candidate));
        match self {
            ScoringStrategy::Last => scores.next_back().unwrap_or(0.0),
            ScoringStrategy::Max => scores.fold(0.0, f64::max),
            ScoringStrategy::Sum => scores.sum(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringStrategy::Last => "last",
            ScoringStrategy::Max => "max",
            ScoringStrategy::Sum => "sum",
        }
    }
}

/// Whether the build-time TF-IDF weight takes part in ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeightPolicy {
    /// Weights are stored for inspection only.
    #[default]
    Ignore,
    /// Word scores are multiplied by the word's weight.
    Scale,
}

impl WeightPolicy {
    #[inline]
    pub fn apply(self, score: f64, weight: f64) -> f64 {
        match self {
            WeightPolicy::Ignore => score,
            WeightPolicy::Scale => score * weight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightPolicy::Ignore => "ignore",
            WeightPolicy::Scale => "scale",
        }
    }
}

/// Score one model word against the query tokens.
///
/// The word itself and each synonym are scored independently and summed.
pub fn word_score(
    word: &ModelWord,
    query_tokens: &[String],
    strategy: ScoringStrategy,
    weights: WeightPolicy,
) -> f64 {
    let direct = strategy.combine(query_tokens, &word.word);
    let via_synonyms: f64 = word
        .synonyms
        .iter()
        .map(|synonym| strategy.combine(query_tokens, synonym))
        .sum();
    weights.apply(direct + via_synonyms, word.weight)
}
