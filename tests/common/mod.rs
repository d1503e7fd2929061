//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::LazyLock;
use whisker::{build_from_files, build_index, CatalogEntry, SearchIndex, SynonymTable};

// Re-export canonical test utilities from whisker::testing
#[allow(unused_imports)]
pub use whisker::testing::{make_breed, make_full_breed, sample_catalog, siamese_entry};

// ============================================================================
// SHIPPED DATA
// ============================================================================

/// The catalog shipped in `data/`.
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/cats-db.json")
}

/// The synonym table shipped in `data/`.
pub fn synonyms_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/synonyms.json")
}

/// Index over the shipped data, built once per test binary.
pub static DATA_INDEX: LazyLock<SearchIndex> = LazyLock::new(|| {
    build_from_files(&catalog_path(), Some(&synonyms_path())).expect("shipped data must build")
});

// ============================================================================
// INDEX BUILDERS
// ============================================================================

/// Index over the in-memory sample catalog, no synonyms.
pub fn sample_index() -> SearchIndex {
    build_index(sample_catalog(), &SynonymTable::new()).unwrap()
}

/// Index from `(breed, description)` pairs.
pub fn index_from(breeds: &[(&str, &str)]) -> SearchIndex {
    index_with_synonyms(breeds, &SynonymTable::new())
}

pub fn index_with_synonyms(breeds: &[(&str, &str)], synonyms: &SynonymTable) -> SearchIndex {
    let catalog = breeds
        .iter()
        .map(|(key, description)| CatalogEntry::new(*key, make_breed(description)))
        .collect();
    build_index(catalog, synonyms).unwrap()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Keys of a result list, best first.
pub fn keys<'a>(results: &[whisker::SearchResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.key).collect()
}
