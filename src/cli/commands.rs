// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use super::display::{
    bold, dim, excerpt, pad_right, pos_badge, row, score_value, section_bot, section_mid,
    section_top, themed, wrap, BOX_WIDTH, BOLD, CYAN, GRAY, YELLOW,
};
use super::SourceArgs;
use anyhow::{bail, Context, Result};
use std::time::Instant;
use whisker::{
    build_from_files, levenshtein, levenshtein_within, search_with, Entity, SearchIndex,
    SearchOptions, SearchResult, EXACT_MATCH_SCORE,
};

/// Breed names within this many edits are offered as suggestions.
const SUGGESTION_DISTANCE: usize = 3;

fn load(source: &SourceArgs) -> Result<SearchIndex> {
    build_from_files(&source.catalog, source.synonyms.as_deref())
        .with_context(|| format!("building index from {}", source.catalog.display()))
}

pub fn run_search(source: &SourceArgs, options: &SearchOptions, query: &str, json: bool) -> Result<()> {
    let index = load(source)?;
    let start = Instant::now();
    let results = search_with(&index, query, options)?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top("SEARCH");
    row(&format!(
        "{} {}   {}",
        dim("query"),
        bold(query),
        dim(&format!(
            "{} of {} breeds, {:.2} ms, strategy={} weights={}",
            results.len(),
            index.len(),
            elapsed.as_secs_f64() * 1000.0,
            options.strategy.as_str(),
            options.weights.as_str()
        ))
    ));

    if results.is_empty() {
        section_mid("RESULTS");
        row(&dim("no matching breeds"));
    }
    for (rank, result) in results.iter().enumerate() {
        section_mid(&format!("#{}", rank + 1));
        print_result(result);
    }
    section_bot();
    Ok(())
}

fn print_result(result: &SearchResult<'_>) {
    row(&format!(
        "{}{}",
        pad_right(&themed(YELLOW, &[BOLD], result.key), BOX_WIDTH - 14),
        score_value(result.total_score, EXACT_MATCH_SCORE)
    ));
    if let Some(word) = result.spotlight {
        row(&format!("{} {}", dim("best word"), word));
    }
    match &result.title {
        Some(title) => row(&excerpt(&title.excerpt1, &title.highlight_word, &title.excerpt2)),
        None => {
            for line in wrap(&result.breed.description, BOX_WIDTH - 2) {
                row(&line);
            }
        }
    }
}

pub fn run_inspect(source: &SourceArgs, breed: Option<&str>) -> Result<()> {
    let index = load(source)?;
    match breed {
        None => print_overview(&index),
        Some(key) => match index.entity(key) {
            Some(entity) => print_entity(entity),
            None => {
                let suggestion = suggest(&index, key);
                match suggestion {
                    Some(close) => bail!("no breed named '{key}' (did you mean '{close}'?)"),
                    None => bail!("no breed named '{key}'"),
                }
            }
        },
    }
    Ok(())
}

/// Closest breed name within [`SUGGESTION_DISTANCE`] edits, ignoring case.
fn suggest<'a>(index: &'a SearchIndex, key: &str) -> Option<&'a str> {
    let wanted = key.to_lowercase();
    index
        .entities()
        .iter()
        .map(|e| (e.key.as_str(), e.key.to_lowercase()))
        .filter(|(_, lower)| levenshtein_within(&wanted, lower, SUGGESTION_DISTANCE))
        .min_by_key(|(_, lower)| levenshtein(&wanted, lower))
        .map(|(name, _)| name)
}

fn print_overview(index: &SearchIndex) {
    section_top("CATALOG");
    row(&dim(&format!(
        "{} breeds, {} model words, {} documents",
        index.len(),
        index.model_word_count(),
        index.term_frequency().num_documents()
    )));
    section_mid("BREEDS");
    for entity in index.entities() {
        let preview: Vec<&str> = entity.model.iter().take(6).map(|w| w.word.as_str()).collect();
        row(&format!(
            "{} {} {}",
            themed(GRAY, &[], &format!("{:>3}", entity.paragraph_id)),
            pad_right(&themed(YELLOW, &[BOLD], &entity.key), 22),
            dim(&format!("{:>2} sentences {:>3} words  {}", entity.sentences.len(), entity.model.len(), preview.join(" ")))
        ));
    }
    section_bot();
}

fn print_entity(entity: &Entity) {
    section_top(&entity.key);
    row(&dim(&format!(
        "paragraph {}  {} sentences  {} model words",
        entity.paragraph_id,
        entity.sentences.len(),
        entity.model.len()
    )));

    section_mid("PARAGRAPH");
    for line in wrap(&entity.paragraph, BOX_WIDTH - 2) {
        row(&line);
    }

    section_mid("MODEL");
    for word in &entity.model {
        let synonyms = if word.synonyms.is_empty() {
            String::new()
        } else {
            themed(CYAN, &[], &word.synonyms.join(", "))
        };
        row(&format!(
            "{} {} {:>9.4}  {}",
            pad_right(&word.word, 20),
            pos_badge(word.pos.as_str()),
            word.weight,
            synonyms
        ));
    }
    section_bot();
}

#[cfg(feature = "server")]
pub fn run_serve(source: SourceArgs, host: String, port: u16, max_query_len: usize) -> Result<()> {
    use whisker::server::{serve, ServerConfig};

    let config = ServerConfig {
        host,
        port,
        catalog: source.catalog,
        synonyms: source.synonyms,
        options: SearchOptions {
            max_query_len,
            ..SearchOptions::default()
        },
    };
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?
        .block_on(serve(config))
        .context("serving HTTP")
}
