// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: edit distance between query tokens and model words.
//!
//! Scoring needs the exact distance for every (query token, candidate) pair,
//! so the workhorse is the unbounded [`levenshtein`]. The bounded variant is
//! for yes/no questions like "is this breed name a typo of that one".

mod levenshtein;

pub use levenshtein::*;
