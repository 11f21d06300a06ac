// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards poker hand.
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::{Card, ParseError, parse_hand};

/// Five distinct cards in the order they were given.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from cards the caller knows are distinct.
    pub(crate) fn from_distinct(cards: [Card; Hand::SIZE]) -> Self {
        debug_assert!(Hand::try_from(cards.as_slice()).is_ok());
        Hand(cards)
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }

    /// Iterates the cards in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.0.iter()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = ParseError;

    /// Creates a hand checking there are five cards and no duplicates.
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| ParseError::WrongCardCount(cards.len()))?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                return Err(ParseError::DuplicateCard(card.to_string()));
            }
        }

        Ok(Hand(cards))
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hand(s)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}

impl Serialize for Hand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
