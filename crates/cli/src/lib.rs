// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank CLI.
//!
//! Reads a hand, evaluates it, and prints the evaluation.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

use handrank_eval::{Deck, Hand, HandEvaluation, parse_hand};

/// Where the hand comes from.
#[derive(Debug)]
pub enum Source {
    /// A hand given on the command line.
    Text(String),
    /// A hand read from the first input line.
    Stdin,
    /// A hand dealt from a shuffled deck.
    Deal,
}

/// The CLI configuration.
#[derive(Debug)]
pub struct Config {
    /// The hand source.
    pub source: Source,
    /// Print the evaluation as JSON.
    pub json: bool,
}

/// Evaluates a hand from the configured source and writes the result to `out`.
pub fn run<R, W>(config: &Config, input: R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let hand = read_hand(&config.source, input)?;
    let eval = HandEvaluation::eval(&hand);
    info!("Evaluated {} as {}", eval.hand(), eval.category());

    if config.json {
        serde_json::to_writer_pretty(&mut *out, &eval)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{eval}")?;
    }

    Ok(())
}

fn read_hand<R: BufRead>(source: &Source, mut input: R) -> Result<Hand> {
    match source {
        Source::Text(text) => Ok(parse_hand(text)?),
        Source::Stdin => {
            let mut line = String::new();
            input
                .read_line(&mut line)
                .context("Failed to read hand from input")?;
            Ok(parse_hand(&line)?)
        }
        Source::Deal => Deck::new_and_shuffled(&mut rand::rng())
            .deal_hand()
            .context("Not enough cards to deal a hand"),
    }
}
