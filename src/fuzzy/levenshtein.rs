// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! Both functions use the single-row DP. Distances count characters, not bytes,
//! so "café" vs "cafe" is one edit.

/// Levenshtein distance between `a` and `b` (insertions, deletions, substitutions).
///
/// Case-sensitive: "Siamese" and "siamese" are one edit apart.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Are these strings within `max` edits of each other?
///
/// Two early exits: a length difference above `max` is rejected before any
/// allocation, and the DP is abandoned once a whole row exceeds `max`.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
