// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand parsing.
//!
//! A hand is written as five whitespace separated tokens, each token a rank
//! symbol followed by a suit symbol, for example `"TD JD QD KD AD"`. Tokens
//! are checked against the [CARDS](crate::CARDS) catalogue.
use log::debug;
use thiserror::Error;

use crate::{Card, Hand};

/// Rank symbols and their values.
static RANK_VALUES: [(&str, u8); 13] = [
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("T", 10),
    ("J", 11),
    ("Q", 12),
    ("K", 13),
    ("A", 14),
];

/// Valid suit symbols.
static SUITS: [&str; 4] = ["H", "S", "C", "D"];

/// Errors returned when parsing a hand or a card symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not hold exactly five cards.
    #[error("invalid hand: must have five cards, found {0}")]
    WrongCardCount(usize),
    /// A token is not one of the 52 cards.
    #[error("invalid hand: contains invalid card `{0}`")]
    InvalidCard(String),
    /// The same card appears more than once.
    #[error("invalid hand: contains duplicate card `{0}`")]
    DuplicateCard(String),
    /// A rank symbol that doesn't map to a rank value.
    #[error(
        "invalid card value `{0}`: must be one of 2-9, T (10), J (Jack), Q (Queen), K (King), or A (Ace)"
    )]
    InvalidCardValue(String),
}

/// Parses a hand, returning the cards in input order.
///
/// Fails with [ParseError::WrongCardCount] if there are not five tokens, then
/// checks each token in order and fails on the first token that is either not
/// a valid card ([ParseError::InvalidCard]) or a repeat of an earlier token
/// ([ParseError::DuplicateCard]).
pub fn parse_hand(text: &str) -> Result<Hand, ParseError> {
    parse_tokens(text).inspect_err(|e| debug!("Rejected hand {text:?}: {e}"))
}

fn parse_tokens(text: &str) -> Result<Hand, ParseError> {
    let tokens = text.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != Hand::SIZE {
        return Err(ParseError::WrongCardCount(tokens.len()));
    }

    let mut cards = Vec::with_capacity(Hand::SIZE);
    for token in tokens {
        let card =
            Card::from_token(token).ok_or_else(|| ParseError::InvalidCard(token.to_string()))?;

        if cards.contains(&card) {
            return Err(ParseError::DuplicateCard(token.to_string()));
        }

        cards.push(card);
    }

    Hand::try_from(cards.as_slice())
}

/// Maps a rank symbol to its value, from 2 for a deuce to 14 for an ace.
pub fn parse_card_value(symbol: &str) -> Result<u8, ParseError> {
    RANK_VALUES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, value)| *value)
        .ok_or_else(|| ParseError::InvalidCardValue(symbol.to_string()))
}

/// Checks if a symbol is one of the `H`, `S`, `C`, `D` suits.
pub fn is_card_suit_valid(symbol: &str) -> bool {
    SUITS.contains(&symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CARDS, Rank};

    #[test]
    fn card_suit_validity() {
        for suit in ["D", "H", "S", "C"] {
            assert!(is_card_suit_valid(suit), "{suit}");
        }

        for suit in ["", "A", "G", "d", "ZZ", "Diamonds", "Hearts", "Spade", "Club"] {
            assert!(!is_card_suit_valid(suit), "{suit}");
        }
    }

    #[test]
    fn card_value_valid() {
        let values = "23456789TJQKA"
            .chars()
            .map(|c| parse_card_value(&c.to_string()).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        // The table agrees with the rank symbols.
        for rank in Rank::ranks() {
            let value = parse_card_value(&rank.symbol().to_string()).unwrap();
            assert_eq!(value, rank.value());
        }
    }

    #[test]
    fn card_value_invalid() {
        for symbol in ["", "0", "1", "10", "NaN", "2 3", "23", "t", "a", "Ace"] {
            assert_eq!(
                parse_card_value(symbol),
                Err(ParseError::InvalidCardValue(symbol.to_string()))
            );
        }

        let err = parse_card_value("0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid card value `0`: must be one of 2-9, T (10), J (Jack), Q (Queen), K (King), or A (Ace)"
        );
    }

    #[test]
    fn hand_wrong_card_count() {
        let tests = [
            ("", 0),
            (" ", 0),
            ("4S", 1),
            ("4S 4C", 2),
            ("4S 4C 2D", 3),
            ("4S 4C 2D 4H", 4),
            ("2H 4S 4C 2D 4H 2S", 6),
            ("not a hand", 3),
            ("not", 1),
        ];

        for (hand, count) in tests {
            assert_eq!(
                parse_hand(hand),
                Err(ParseError::WrongCardCount(count)),
                "{hand:?}"
            );
        }

        assert_eq!(
            ParseError::WrongCardCount(4).to_string(),
            "invalid hand: must have five cards, found 4"
        );
    }

    #[test]
    fn hand_invalid_card() {
        let tests = [
            ("2H 4S 4C 2D 4P", "4P"),
            ("5T 4S 4C 2D 4P", "5T"),
            ("2H 4S 4C 2D 10H", "10H"),
            ("2D 3D PP 5D 6D", "PP"),
            ("2d 3D 4D 5D 6D", "2d"),
            ("Every good boy does fine", "Every"),
        ];

        for (hand, card) in tests {
            assert_eq!(
                parse_hand(hand),
                Err(ParseError::InvalidCard(card.to_string())),
                "{hand:?}"
            );
        }
    }

    #[test]
    fn hand_duplicate_card() {
        // The duplicate is found before the invalid 4P token.
        assert_eq!(
            parse_hand("2H 2H 4C 2D 4P"),
            Err(ParseError::DuplicateCard("2H".to_string()))
        );
        assert_eq!(
            parse_hand("5H 4S 4C 2D 2D"),
            Err(ParseError::DuplicateCard("2D".to_string()))
        );
        assert_eq!(
            parse_hand("AD AD QS JS TC"),
            Err(ParseError::DuplicateCard("AD".to_string()))
        );
    }

    #[test]
    fn hand_invalid_card_before_duplicate() {
        assert_eq!(
            parse_hand("2H XX 4C 2H 4S"),
            Err(ParseError::InvalidCard("XX".to_string()))
        );
    }

    #[test]
    fn hand_valid_keeps_order() {
        let hand = parse_hand("2H 4S 4C 2D 4H").unwrap();
        let tokens = hand.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(tokens, ["2H", "4S", "4C", "2D", "4H"]);
    }

    #[test]
    fn hand_round_trip_normalizes_spaces() {
        let hand = parse_hand("  AD\tKH  QS JS\nTC ").unwrap();
        assert_eq!(hand.to_string(), "AD KH QS JS TC");

        let hand: Hand = "AD KH QS JS TC".parse().unwrap();
        assert_eq!(hand.to_string(), "AD KH QS JS TC");
    }

    #[test]
    fn hand_catalogue_windows() {
        // Every run of five consecutive catalogue cards is a valid hand.
        for window in CARDS.windows(Hand::SIZE) {
            let text = window.join(" ");
            let hand = parse_hand(&text).unwrap();
            assert_eq!(hand.to_string(), text);
        }
    }
}
