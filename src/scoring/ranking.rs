// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher total score first. Equal scores keep catalog order (lower
//! paragraph id first), so the same query always returns the same list no
//! matter how the scoring work was scheduled.

use std::cmp::Ordering;

/// Anything that can be ranked: a total score and a catalog position.
pub trait Ranked {
    fn total_score(&self) -> f64;
    fn paragraph_id(&self) -> usize;
}

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Total score** - descending
/// 2. **Paragraph id** - ascending, for determinism
pub fn compare_results<R: Ranked>(a: &R, b: &R) -> Ordering {
    b.total_score()
        .total_cmp(&a.total_score())
        .then_with(|| a.paragraph_id().cmp(&b.paragraph_id()))
}

/// Sort best-first and keep at most `limit`.
pub fn rank_and_truncate<R: Ranked>(results: &mut Vec<R>, limit: usize) {
    results.sort_by(compare_results);
    results.truncate(limit);
}
