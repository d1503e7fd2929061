// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: score every entity, keep the matches, rank, highlight.
//!
//! Each query produces fresh [`EntityScore`] values; the index is only ever
//! borrowed. That makes concurrent queries safe without locks, and with the
//! `parallel` feature each query scores its entities on the rayon pool.
//!
//! Pipeline for one query:
//!
//! ```text
//! validate → tokenize → score_entity (all) → drop total ≤ 0
//!          → rank (score desc, catalog order) → truncate → select_title
//! ```

pub mod highlight;
pub mod utils;

use crate::contracts::{check_highlight_parts, check_results_ranked};
use crate::error::QueryError;
use crate::index::SearchIndex;
use crate::scoring::ranking::{rank_and_truncate, Ranked};
use crate::scoring::{word_score, ScoringStrategy, WeightPolicy};
use crate::types::{BreedRecord, Entity};
use highlight::{select_title, Highlight};
use serde::Serialize;
use tracing::debug;
use utils::{parse_query, validate_query};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Results returned when the caller doesn't choose.
pub const DEFAULT_LIMIT: usize = 5;

/// Longest accepted query, in characters.
///
/// Scoring cost grows with entities × model words × synonyms × query tokens,
/// so the query is the one input a caller can blow up.
pub const DEFAULT_MAX_QUERY_LEN: usize = 256;

/// Knobs for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub limit: usize,
    pub strategy: ScoringStrategy,
    pub weights: WeightPolicy,
    pub max_query_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: DEFAULT_LIMIT,
            strategy: ScoringStrategy::default(),
            weights: WeightPolicy::default(),
            max_query_len: DEFAULT_MAX_QUERY_LEN,
        }
    }
}

/// Score of a single model word for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordScore<'a> {
    pub word: &'a str,
    pub score: f64,
}

/// Per-query scratch values for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityScore<'a> {
    pub total_score: f64,
    /// Highest-scoring model word; the first one wins ties.
    pub spotlight: Option<&'a str>,
    /// One entry per model word, in model order.
    pub word_scores: Vec<WordScore<'a>>,
}

/// One ranked hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub key: &'a str,
    /// Serialized inline: the five text fields sit beside `key`.
    #[serde(flatten)]
    pub breed: &'a BreedRecord,
    pub paragraph_id: usize,
    pub total_score: f64,
    pub spotlight: Option<&'a str>,
    /// `None` when the word could not be located in any text field.
    pub title: Option<Highlight>,
}

impl Ranked for SearchResult<'_> {
    fn total_score(&self) -> f64 {
        self.total_score
    }

    fn paragraph_id(&self) -> usize {
        self.paragraph_id
    }
}

/// Score every model word of `entity` against the query tokens.
pub fn score_entity<'a>(
    entity: &'a Entity,
    query_tokens: &[String],
    options: &SearchOptions,
) -> EntityScore<'a> {
    let mut total_score = 0.0;
    let mut best = 0.0;
    let mut spotlight = None;
    let mut word_scores = Vec::with_capacity(entity.model.len());

    for entry in &entity.model {
        let score = word_score(entry, query_tokens, options.strategy, options.weights);
        total_score += score;
        if score > 0.0 && score > best {
            best = score;
            spotlight = Some(entry.word.as_str());
        }
        word_scores.push(WordScore {
            word: &entry.word,
            score,
        });
    }

    EntityScore {
        total_score,
        spotlight,
        word_scores,
    }
}

fn candidate<'a>(
    entity: &'a Entity,
    query_tokens: &[String],
    options: &SearchOptions,
) -> Option<SearchResult<'a>> {
    let score = score_entity(entity, query_tokens, options);
    (score.total_score > 0.0).then(|| SearchResult {
        key: &entity.key,
        breed: &entity.breed,
        paragraph_id: entity.paragraph_id,
        total_score: score.total_score,
        spotlight: score.spotlight,
        title: None,
    })
}

/// Search with default options: top 5, last-token scoring, weights ignored.
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Result<Vec<SearchResult<'a>>, QueryError> {
    search_with(index, query, &SearchOptions::default())
}

/// Search with explicit options.
///
/// An empty query is an error. A query with no tokens (only punctuation or
/// whitespace) is fine and matches nothing.
pub fn search_with<'a>(
    index: &'a SearchIndex,
    query: &str,
    options: &SearchOptions,
) -> Result<Vec<SearchResult<'a>>, QueryError> {
    validate_query(query, options.max_query_len)?;
    let tokens = parse_query(query);
    if tokens.is_empty() {
        debug!(query, "query has no tokens");
        return Ok(Vec::new());
    }

    #[cfg(feature = "parallel")]
    let mut results: Vec<SearchResult<'a>> = index
        .entities()
        .par_iter()
        .filter_map(|entity| candidate(entity, &tokens, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<SearchResult<'a>> = index
        .entities()
        .iter()
        .filter_map(|entity| candidate(entity, &tokens, options))
        .collect();

    let matched = results.len();
    rank_and_truncate(&mut results, options.limit);

    let entities = index.entities();
    for result in &mut results {
        result.title = select_title(&entities[result.paragraph_id], result.spotlight);
        if let Some(title) = &result.title {
            check_highlight_parts(title);
        }
    }
    check_results_ranked(&results, options.limit);

    debug!(
        query,
        tokens = tokens.len(),
        strategy = options.strategy.as_str(),
        weights = options.weights.as_str(),
        matched,
        returned = results.len(),
        "search complete"
    );
    Ok(results)
}
