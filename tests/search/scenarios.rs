//! End-to-end query scenarios over small catalogs and the shipped data.

use super::common::{index_from, keys, make_full_breed, siamese_entry, DATA_INDEX};
use whisker::{
    build_index, search, search_with, CatalogEntry, QueryError, SearchOptions, SynonymTable,
};

// ============================================================================
// SINGLE-BREED CATALOG
// ============================================================================

#[test]
fn test_talkative_finds_siamese() {
    let index = build_index(vec![siamese_entry()], &SynonymTable::new()).unwrap();
    let results = search(&index, "talkative").unwrap();

    assert_eq!(keys(&results), vec!["Siamese"]);
    let title = results[0].title.as_ref().expect("title");
    assert_eq!(title.highlight_word, "talkative");
}

#[test]
fn test_empty_query_is_error_not_empty_success() {
    let index = build_index(vec![siamese_entry()], &SynonymTable::new()).unwrap();
    assert_eq!(search(&index, ""), Err(QueryError::Empty));
}

#[test]
fn test_punctuation_only_query_matches_nothing() {
    let index = build_index(vec![siamese_entry()], &SynonymTable::new()).unwrap();
    assert_eq!(search(&index, "?!...").unwrap(), vec![]);
    assert_eq!(search(&index, "   ").unwrap(), vec![]);
}

#[test]
fn test_overlong_query_is_rejected() {
    let index = build_index(vec![siamese_entry()], &SynonymTable::new()).unwrap();
    let query = "cat ".repeat(100);
    assert!(matches!(
        search(&index, &query),
        Err(QueryError::TooLong { len: 400, max: 256 })
    ));
}

// ============================================================================
// SHIPPED DATA
// ============================================================================

#[test]
fn test_shipped_data_builds() {
    assert_eq!(DATA_INDEX.len(), 12);
    assert_eq!(DATA_INDEX.entities()[0].key, "Abyssinian");
    assert!(DATA_INDEX.model_word_count() > 100);
}

#[test]
fn test_synonym_query_finds_siamese() {
    let results = search(&DATA_INDEX, "chatty").unwrap();
    assert_eq!(results[0].key, "Siamese");
    assert_eq!(results[0].spotlight, Some("talkative"));
}

#[test]
fn test_water_lovers() {
    let results = search(&DATA_INDEX, "water").unwrap();
    let mut top: Vec<&str> = keys(&results)[..3].to_vec();
    top.sort_unstable();
    assert_eq!(top, vec!["Bengal", "Maine Coon", "Turkish Van"]);
    for result in &results[..3] {
        assert_eq!(result.spotlight, Some("water"));
    }
}

#[test]
fn test_grooming_finds_persian() {
    let results = search(&DATA_INDEX, "grooming").unwrap();
    assert_eq!(results[0].key, "Persian");
}

#[test]
fn test_unknown_word_still_returns_fuzzy_matches() {
    // every model word is some finite distance away, so every breed scores
    let results = search(&DATA_INDEX, "zzzzzzzz").unwrap();
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.total_score > 0.0 && r.total_score < 1.0e6));
}

#[test]
fn test_typo_keeps_spotlight_on_intended_word() {
    let options = SearchOptions {
        limit: usize::MAX,
        ..SearchOptions::default()
    };
    let results = search_with(&DATA_INDEX, "talkativ", &options).unwrap();
    let siamese = results.iter().find(|r| r.key == "Siamese").expect("Siamese");
    assert_eq!(siamese.spotlight, Some("talkative"));
}

#[test]
fn test_matching_is_case_sensitive() {
    let options = SearchOptions {
        limit: usize::MAX,
        ..SearchOptions::default()
    };
    let score_for = |query: &str| {
        search_with(&DATA_INDEX, query, &options)
            .unwrap()
            .into_iter()
            .find(|r| r.key == "Siamese")
            .map(|r| r.total_score)
            .unwrap()
    };
    assert!(score_for("talkative") > score_for("Talkative"));
}

// ============================================================================
// TF-IDF WEIGHTS
// ============================================================================

#[test]
fn test_shared_word_gets_per_entity_weight() {
    let index = index_from(&[
        ("Bengal", "The playful Bengal stays playful. A playful cat."),
        ("Maine Coon", "Gentle and playful."),
        ("Persian", "Quiet lap warmer."),
    ]);
    let bengal = index.entity("Bengal").unwrap().model.get("playful").unwrap().weight;
    let coon = index.entity("Maine Coon").unwrap().model.get("playful").unwrap().weight;

    // same document frequency, different term frequency
    assert!(bengal > coon);
    assert!((bengal - 3.0 * coon).abs() < 1e-9);

    // stored, but not used for ranking by default
    let results = search(&index, "playful").unwrap();
    let bengal_score = results.iter().find(|r| r.key == "Bengal").unwrap().total_score;
    assert!(bengal_score > 0.0);
}

#[test]
fn test_paragraph_glue_artifact() {
    // description and did_you_know are joined without a separator
    let catalog = vec![CatalogEntry::new(
        "Garden",
        make_full_breed("Pocket", "", "", "Loves the garden", "hose water"),
    )];
    let index = build_index(catalog, &SynonymTable::new()).unwrap();
    let entity = index.entity("Garden").unwrap();
    assert!(entity.model.contains("gardenhose"));

    let results = search(&index, "gardenhose").unwrap();
    assert_eq!(results[0].spotlight, Some("gardenhose"));
    // the glued word is in no field, so the title falls back to the first model word
    let title = results[0].title.as_ref().expect("fallback title");
    assert_eq!(title.highlight_word, "Pocket");
    assert_eq!(title.excerpt, "Pocket");
}
