// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::{commands, Cli, Commands};

/// `RUST_LOG` wins; otherwise `-v` flags pick the level for this crate.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "info,whisker=debug",
        _ => "debug,whisker=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            source,
            ranking,
            json,
            query,
        } => commands::run_search(&source, &ranking.options(), &query, json),
        Commands::Inspect { source, breed } => commands::run_inspect(&source, breed.as_deref()),
        #[cfg(feature = "server")]
        Commands::Serve {
            source,
            host,
            port,
            max_query_len,
        } => commands::run_serve(source, host, port, max_query_len),
    }
}
