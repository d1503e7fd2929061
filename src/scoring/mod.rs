// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A word score is an inverse edit distance: `1 / (distance + ε)`. An exact
//! match is worth a million, one typo is worth one, two typos a half. So an
//! exact hit on any model word dominates any amount of near-miss noise, and
//! the sum over an entity's model words behaves like "did this entity contain
//! the query, and how close did everything else come".

mod core;
pub mod ranking;

pub use core::*;
