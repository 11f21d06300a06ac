// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(Card::from_token("AH"), Some(ah));
//! ```
//!
//! and to parse a five cards [Hand] from text, cards are checked against the
//! 52 tokens [CARDS] catalogue and kept in input order:
//!
//! ```
//! # use handrank_cards::{parse_hand, ParseError};
//! let hand = parse_hand("TD JD QD KD AD").unwrap();
//! assert_eq!(hand.to_string(), "TD JD QD KD AD");
//!
//! assert!(matches!(parse_hand("2D 3D PP 5D 6D"), Err(ParseError::InvalidCard(_))));
//! assert!(matches!(parse_hand("2D 3D 5D 6D"), Err(ParseError::WrongCardCount(4))));
//! ```
//!
//! A [Deck] type is used for dealing random hands and iterating all hands:
//!
//! ```no_run
//! # use handrank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_hand(|_hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{CARDS, Card, Rank, Suit};

mod deck;
pub use deck::Deck;

mod hand;
pub use hand::Hand;

mod parser;
pub use parser::{ParseError, is_card_suit_valid, parse_card_value, parse_hand};
