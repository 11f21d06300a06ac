// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank poker hand classifier.
//!
//! Classifies a five cards hand into one of the poker categories, from high
//! card to straight flush, and gives each card a score and a description.
//!
//! To use the classifier parse a hand and use [HandEvaluation] to evaluate it:
//!
//! ```
//! # use handrank_eval::*;
//! let hand = parse_hand("2D 3D 4D 5D 6D").unwrap();
//! let eval = HandEvaluation::eval(&hand);
//! assert_eq!(eval.category(), Category::StraightFlush);
//!
//! let scores = eval.result().iter().map(|s| s.score()).collect::<Vec<_>>();
//! assert_eq!(scores, [906, 905, 904, 903, 902]);
//! ```
//!
//! Each category has a base score, from 100 for a high card to 900 for a
//! straight flush, that is added to the rank value (2 to 14) of the cards that
//! make the category. Other cards are kickers and are scored as high cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
pub use category::Category;

mod evaluation;
pub use evaluation::{CardScore, EvalError, HandEvaluation};

mod stats;
pub use stats::HandStats;

// Reexport cards types.
pub use handrank_cards::{
    CARDS, Card, Deck, Hand, ParseError, Rank, Suit, is_card_suit_valid, parse_card_value,
    parse_hand,
};
