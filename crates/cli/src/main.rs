// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank CLI.
use anyhow::Result;
use clap::Parser;
use std::io;

use handrank_cli::{Config, Source};

#[derive(Debug, Parser)]
#[clap(version, about = "Classifies a five cards poker hand.")]
struct Cli {
    /// The hand to evaluate, e.g. "TD JD QD KD AD", read from stdin if missing.
    hand: Option<String>,
    /// Deal a random hand from a shuffled deck.
    #[clap(long, conflicts_with = "hand")]
    deal: bool,
    /// Print the evaluation as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let source = match cli.hand {
        Some(hand) => Source::Text(hand),
        None if cli.deal => Source::Deal,
        None => Source::Stdin,
    };

    let config = Config {
        source,
        json: cli.json,
    };

    handrank_cli::run(&config, io::stdin().lock(), &mut io::stdout().lock())
}
