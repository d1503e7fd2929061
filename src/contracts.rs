// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and for search results.
//!
//! Every check is a `debug_assert!`: free in release builds, loud in tests
//! and debug builds.
//!
//! | Contract                     | Property                                          |
//! |------------------------------|---------------------------------------------------|
//! | `check_index_well_formed`    | `entities[i].paragraph_id == i`, keys resolve     |
//! | `check_weights_finite`       | every model-word weight is a finite number        |
//! | `check_results_ranked`       | positive, sorted best-first, within the limit     |
//! | `check_highlight_parts`      | `excerpt1 + word + excerpt2 == excerpt`           |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

// An exact match must beat any single-edit match by a wide margin, otherwise
// a fuzzy hit on a long synonym list could outrank the word itself.
const _: () = {
    const EPSILON: f64 = crate::scoring::EPSILON;
    const EXACT: f64 = 1.0 / EPSILON;
    const ONE_EDIT: f64 = 1.0 / (1.0 + EPSILON);
    assert!(EXACT > 1000.0 * ONE_EDIT);
};

use crate::index::SearchIndex;
use crate::scoring::ranking::{compare_results, Ranked};
use crate::search::highlight::Highlight;
use std::cmp::Ordering;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that entities sit at their own paragraph id and are reachable by key.
///
/// # Panics (debug builds only)
/// Panics if any entity is out of place or its key resolves elsewhere.
#[inline]
pub fn check_index_well_formed(index: &SearchIndex) {
    for (i, entity) in index.entities().iter().enumerate() {
        debug_assert_eq!(
            entity.paragraph_id, i,
            "Contract violation: entity '{}' has paragraph_id {} at position {}",
            entity.key, entity.paragraph_id, i
        );
        debug_assert_eq!(
            index.entity(&entity.key).map(|e| e.paragraph_id),
            Some(i),
            "Contract violation: key '{}' does not resolve to position {}",
            entity.key,
            i
        );
    }
    debug_assert_eq!(
        index.term_frequency().num_documents(),
        index.len(),
        "Contract violation: {} documents registered for {} entities",
        index.term_frequency().num_documents(),
        index.len()
    );
}

/// Check that no weight came out NaN or infinite.
#[inline]
pub fn check_weights_finite(index: &SearchIndex) {
    for entity in index.entities() {
        for word in &entity.model {
            debug_assert!(
                word.weight.is_finite(),
                "Contract violation: weight of '{}' in '{}' is {}",
                word.word,
                entity.key,
                word.weight
            );
        }
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check a final result list.
///
/// # Panics (debug builds only)
/// Panics if the list is longer than `limit`, holds a non-positive score, or
/// any adjacent pair is out of order.
#[inline]
pub fn check_results_ranked<R: Ranked>(results: &[R], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "Contract violation: {} results for limit {}",
        results.len(),
        limit
    );

    for (i, result) in results.iter().enumerate() {
        debug_assert!(
            result.total_score() > 0.0,
            "Contract violation: results[{}] has score {}",
            i,
            result.total_score()
        );
    }

    for i in 1..results.len() {
        debug_assert!(
            compare_results(&results[i - 1], &results[i]) != Ordering::Greater,
            "Contract violation: results[{}] (score {}, id {}) ranks below results[{}] (score {}, id {})",
            i - 1,
            results[i - 1].total_score(),
            results[i - 1].paragraph_id(),
            i,
            results[i].total_score(),
            results[i].paragraph_id()
        );
    }
}

/// Check that a highlight's pieces reassemble into its excerpt.
#[inline]
pub fn check_highlight_parts(highlight: &Highlight) {
    debug_assert_eq!(
        highlight.index,
        highlight.excerpt1.len(),
        "Contract violation: highlight index {} but excerpt1 is {} bytes",
        highlight.index,
        highlight.excerpt1.len()
    );
    debug_assert!(
        highlight.excerpt.len()
            == highlight.excerpt1.len() + highlight.highlight_word.len() + highlight.excerpt2.len()
            && highlight.excerpt.starts_with(&highlight.excerpt1)
            && highlight.excerpt[highlight.excerpt1.len()..].starts_with(&highlight.highlight_word)
            && highlight.excerpt.ends_with(&highlight.excerpt2),
        "Contract violation: '{}' + '{}' + '{}' != '{}'",
        highlight.excerpt1,
        highlight.highlight_word,
        highlight.excerpt2,
        highlight.excerpt
    );
}
