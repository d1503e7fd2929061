// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query validation and parsing.

use crate::error::QueryError;
use crate::text::tokenize_words;

/// Reject queries that are empty or longer than `max_chars` characters.
///
/// Whitespace-only queries pass: they are valid input that simply has no
/// tokens.
pub fn validate_query(query: &str, max_chars: usize) -> Result<(), QueryError> {
    if query.is_empty() {
        return Err(QueryError::Empty);
    }
    let len = query.chars().count();
    if len > max_chars {
        return Err(QueryError::TooLong {
            len,
            max: max_chars,
        });
    }
    Ok(())
}

/// Split a query into tokens with the corpus tokenizer.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("playful, talkative!");
/// assert_eq!(terms, vec!["playful", "talkative"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    tokenize_words(query)
}
