//! Multi-word queries under each scoring strategy, and weight scaling.

use super::common::{index_from, index_with_synonyms, keys};
use whisker::{search_with, ScoringStrategy, SearchOptions, SynonymTable, WeightPolicy};

fn with(strategy: ScoringStrategy, weights: WeightPolicy) -> SearchOptions {
    SearchOptions {
        strategy,
        weights,
        ..SearchOptions::default()
    }
}

fn two_breeds() -> whisker::SearchIndex {
    index_from(&[("Quiet", "Calm lap warmer."), ("Chatty", "Loud talkative companion.")])
}

#[test]
fn test_last_token_decides_by_default() {
    let index = two_breeds();
    let options = SearchOptions::default();

    // "talkative" is first, so under the default it is overwritten by "lap"
    let results = search_with(&index, "talkative lap", &options).unwrap();
    assert_eq!(results[0].key, "Quiet");

    let results = search_with(&index, "lap talkative", &options).unwrap();
    assert_eq!(results[0].key, "Chatty");
}

#[test]
fn test_max_is_order_independent() {
    let index = two_breeds();
    let options = with(ScoringStrategy::Max, WeightPolicy::Ignore);
    let a = search_with(&index, "talkative lap", &options).unwrap();
    let b = search_with(&index, "lap talkative", &options).unwrap();

    assert_eq!(keys(&a), keys(&b));
    assert!(a.iter().all(|r| r.total_score > 1.0e5));
}

#[test]
fn test_sum_adds_every_token() {
    let index = two_breeds();
    let last = search_with(&index, "zzz talkative", &SearchOptions::default()).unwrap();
    let sum = search_with(&index, "zzz talkative", &with(ScoringStrategy::Sum, WeightPolicy::Ignore)).unwrap();

    let chatty = |r: &[whisker::SearchResult<'_>]| r.iter().find(|r| r.key == "Chatty").unwrap().total_score;
    assert!(chatty(&sum) > chatty(&last));
}

#[test]
fn test_synonyms_scored_per_token_strategy() {
    let synonyms: SynonymTable = [("talkative", vec!["chatty"])].into_iter().collect();
    let index = index_with_synonyms(
        &[("Quiet", "Calm lap warmer."), ("Siamese", "Very talkative.")],
        &synonyms,
    );
    let results = search_with(&index, "chatty", &SearchOptions::default()).unwrap();
    assert_eq!(results[0].key, "Siamese");
    assert_eq!(results[0].spotlight, Some("talkative"));
}

#[test]
fn test_scale_uses_weights() {
    // "playful" appears in both breeds; "Bengal" repeats it so its weight is higher
    let index = index_from(&[
        ("Maine Coon", "Gentle and playful."),
        ("Bengal", "The playful Bengal. A playful climber."),
        ("Persian", "Calm lap warmer."),
    ]);

    let ignore = search_with(&index, "playful", &SearchOptions::default()).unwrap();
    let scale = search_with(&index, "playful", &with(ScoringStrategy::Last, WeightPolicy::Scale)).unwrap();

    // both exact, the catalog order decides which of the near ties leads without weights
    assert!(ignore.iter().take(2).any(|r| r.key == "Maine Coon"));
    assert_eq!(scale[0].key, "Bengal");
}
