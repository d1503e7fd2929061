//! Invariants that hold for any catalog and any query.

use super::common::index_from;
use proptest::prelude::*;
use whisker::{
    highlight_word, search, search_with, tokenize_words, ScoringStrategy, SearchOptions,
    WeightPolicy, DEFAULT_LIMIT, EXACT_MATCH_SCORE,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

/// Generate a sentence of words ending in a period.
fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..8).prop_map(|words| format!("{}.", words.join(" ")))
}

/// Generate a catalog of descriptions, one per breed.
fn catalog_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(sentence_strategy(), 1..4).prop_map(|s| s.join(" ")),
        1..10,
    )
}

fn strategy_strategy() -> impl Strategy<Value = ScoringStrategy> {
    prop::sample::select(vec![
        ScoringStrategy::Last,
        ScoringStrategy::Max,
        ScoringStrategy::Sum,
    ])
}

fn build(descriptions: &[String]) -> whisker::SearchIndex {
    let names: Vec<String> = (0..descriptions.len()).map(|i| format!("Breed{i}")).collect();
    let pairs: Vec<(&str, &str)> = names
        .iter()
        .zip(descriptions)
        .map(|(n, d)| (n.as_str(), d.as_str()))
        .collect();
    index_from(&pairs)
}

// ============================================================================
// RESULT LIST PROPERTIES
// ============================================================================

proptest! {
    /// Property: results are positive, best-first, and never exceed the limit.
    #[test]
    fn prop_results_ranked_and_bounded(
        catalog in catalog_strategy(),
        query in prop::collection::vec(word_strategy(), 1..4).prop_map(|w| w.join(" ")),
        strategy in strategy_strategy(),
        limit in 0usize..8,
    ) {
        let index = build(&catalog);
        let options = SearchOptions { limit, strategy, ..SearchOptions::default() };
        let results = search_with(&index, &query, &options).unwrap();

        prop_assert!(results.len() <= limit);
        for r in &results {
            prop_assert!(r.total_score > 0.0);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].total_score >= pair[1].total_score);
            if pair[0].total_score == pair[1].total_score {
                prop_assert!(pair[0].paragraph_id < pair[1].paragraph_id);
            }
        }
    }

    /// Property: a word taken from a breed's text scores that breed at least
    /// one exact match, and puts it in the result list when few breeds tie.
    #[test]
    fn prop_exact_word_is_found(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let index = build(&catalog);
        let entity = &index.entities()[pick.index(index.len())];
        prop_assume!(!entity.model.is_empty());
        let word = entity.model.first().unwrap().word.clone();

        let options = SearchOptions { limit: usize::MAX, ..SearchOptions::default() };
        let results = search_with(&index, &word, &options).unwrap();
        let hit = results.iter().find(|r| r.key == entity.key);
        prop_assert!(hit.is_some());
        prop_assert!(hit.unwrap().total_score >= EXACT_MATCH_SCORE * 0.999);
    }

    /// Property: searching twice gives the same answer.
    #[test]
    fn prop_search_is_deterministic(catalog in catalog_strategy(), query in word_strategy()) {
        let index = build(&catalog);
        let first = search(&index, &query).unwrap();
        let second = search(&index, &query).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: the default limit is never exceeded.
    #[test]
    fn prop_default_limit(catalog in catalog_strategy(), query in word_strategy()) {
        let index = build(&catalog);
        let results = search(&index, &query).unwrap();
        prop_assert!(results.len() <= DEFAULT_LIMIT);
        prop_assert!(results.len() <= index.len());
    }

    /// Property: scaling by weight never turns a non-match into a match.
    #[test]
    fn prop_scale_only_reorders_or_drops(catalog in catalog_strategy(), query in word_strategy()) {
        let index = build(&catalog);
        let all = SearchOptions { limit: usize::MAX, ..SearchOptions::default() };
        let scaled = SearchOptions { weights: WeightPolicy::Scale, ..all };

        let plain: Vec<&str> = search_with(&index, &query, &all).unwrap().iter().map(|r| r.key).collect();
        for r in search_with(&index, &query, &scaled).unwrap() {
            prop_assert!(plain.contains(&r.key));
        }
    }
}

// ============================================================================
// HIGHLIGHT PROPERTIES
// ============================================================================

proptest! {
    /// Property: any excerpt reassembles from its three parts.
    #[test]
    fn prop_highlight_parts_concatenate(
        words in prop::collection::vec("[a-zA-Zé]{1,10}", 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let text = words.join(" ");
        let word = &words[pick.index(words.len())];
        let h = highlight_word(&text, word).unwrap();

        prop_assert_eq!(format!("{}{}{}", h.excerpt1, h.highlight_word, h.excerpt2), h.excerpt.clone());
        prop_assert_eq!(h.index, h.excerpt1.len());
        prop_assert!(h.excerpt.contains(word.as_str()));
    }

    /// Property: the excerpt never holds more than the window allows.
    #[test]
    fn prop_highlight_window_bounded(
        words in prop::collection::vec("[a-z]{1,6}", 1..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let text = words.join(" ");
        let word = &words[pick.index(words.len())];
        let h = highlight_word(&text, word).unwrap();
        // 30 chars each side, plus a trailing word of at most 6, plus two ellipses
        prop_assert!(h.excerpt.chars().count() <= word.chars().count() + 30 + 30 + 6 + 6);
    }

    /// Property: tokens never contain separators.
    #[test]
    fn prop_tokens_are_word_chars(text in "\\PC{0,80}") {
        for token in tokenize_words(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'));
        }
    }
}
