// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the whisker command-line interface.
//!
//! Three subcommands: `search` to query a catalog from the terminal,
//! `inspect` to look at what preprocessing made of each breed, and `serve`
//! to put the search behind HTTP. File paths and the port can also come from
//! the environment (`WHISKER_CATALOG`, `WHISKER_SYNONYMS`, `WHISKER_PORT`).

pub mod commands;
pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use whisker::{ScoringStrategy, SearchOptions, WeightPolicy, DEFAULT_LIMIT, DEFAULT_MAX_QUERY_LEN};

#[derive(Parser)]
#[command(
    name = "whisker",
    about = "Fuzzy, synonym-aware search over a catalog of cat breeds",
    version
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog and synonyms come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Catalog JSON: an object keyed by breed name
    #[arg(long, env = "WHISKER_CATALOG", default_value = "data/cats-db.json")]
    pub catalog: PathBuf,

    /// Synonym JSON: an object mapping a word to a list of synonyms
    #[arg(long, env = "WHISKER_SYNONYMS")]
    pub synonyms: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RankingArgs {
    /// Maximum number of results to return
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// How scores from several query words combine
    #[arg(long, value_enum, default_value_t = StrategyArg::Last)]
    pub strategy: StrategyArg,

    /// Whether TF-IDF weights scale word scores
    #[arg(long, value_enum, default_value_t = WeightsArg::Ignore)]
    pub weights: WeightsArg,

    /// Longest accepted query, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_QUERY_LEN)]
    pub max_query_len: usize,
}

impl RankingArgs {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.limit,
            strategy: self.strategy.into(),
            weights: self.weights.into(),
            max_query_len: self.max_query_len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Last query word decides
    Last,
    /// Best query word decides
    Max,
    /// Every query word counts
    Sum,
}

impl From<StrategyArg> for ScoringStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Last => ScoringStrategy::Last,
            StrategyArg::Max => ScoringStrategy::Max,
            StrategyArg::Sum => ScoringStrategy::Sum,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightsArg {
    /// Weights are informational only
    Ignore,
    /// Multiply word scores by their weight
    Scale,
}

impl From<WeightsArg> for WeightPolicy {
    fn from(arg: WeightsArg) -> Self {
        match arg {
            WeightsArg::Ignore => WeightPolicy::Ignore,
            WeightsArg::Scale => WeightPolicy::Scale,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display ranked breeds
    Search {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        ranking: RankingArgs,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Search query
        query: String,
    },

    /// Show what preprocessing extracted for each breed
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Show one breed in detail
        breed: Option<String>,
    },

    /// Serve GET /search and GET /health over HTTP
    #[cfg(feature = "server")]
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "WHISKER_PORT", default_value_t = 3000)]
        port: u16,

        /// Longest accepted query, in characters
        #[arg(long, default_value_t = DEFAULT_MAX_QUERY_LEN)]
        max_query_len: usize,
    },
}
