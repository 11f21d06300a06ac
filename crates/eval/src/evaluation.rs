// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
//!
//! An evaluation has five scored slots, one for each card. Slots are ordered
//! by the card rank group size and then by rank, so that the first slot holds
//! the hand dominant score, and cards of the same rank keep the input order.
//!
//! Cards that are part of the category combination are scored with the
//! category base score plus the card rank value, kickers are scored as high
//! cards:
//!
//! ```
//! # use handrank_eval::*;
//! let hand = parse_hand("2D 2C 2S 2H 6D").unwrap();
//! let eval = HandEvaluation::eval(&hand);
//! assert_eq!(eval.category(), Category::FourOfAKind);
//! assert_eq!(eval.result()[0].score(), 802);
//! assert_eq!(eval.result()[0].description(), "Four of a kind, High Card: 2");
//! assert_eq!(eval.result()[4].score(), 106);
//! assert_eq!(eval.result()[4].description(), "High Card: 6");
//! ```
use log::{debug, trace};
use serde::Serialize;
use std::{cmp::Reverse, fmt};
use thiserror::Error;

use handrank_cards::{Card, Hand, Rank};

use crate::{Category, HandStats};

/// Error returned when evaluating an unvalidated collection of cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The cards collection doesn't have five cards.
    #[error("invalid hand shape: expected five cards, found {0}")]
    InvalidHandShape(usize),
}

/// The score and description of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardScore {
    card: Card,
    score: u32,
    description: String,
}

impl CardScore {
    fn new(card: Card, category: Category, group_size: usize) -> Self {
        let value = card.rank().value();
        if category.is_made(group_size) && category != Category::HighCard {
            Self {
                card,
                score: category.base_score() + u32::from(value),
                description: format!("{category}, High Card: {value}"),
            }
        } else {
            Self::high_card(card)
        }
    }

    fn high_card(card: Card) -> Self {
        let value = card.rank().value();
        Self {
            card,
            score: Category::HighCard.base_score() + u32::from(value),
            description: format!("High Card: {value}"),
        }
    }

    /// The card this slot refers to.
    pub fn card(&self) -> Card {
        self.card
    }

    /// The card score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The card description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The evaluation of a five cards hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandEvaluation {
    hand: String,
    category: Category,
    result: [CardScore; Hand::SIZE],
}

impl HandEvaluation {
    /// Evaluates a hand.
    pub fn eval(hand: &Hand) -> Self {
        Self::eval_five(hand.cards())
    }

    /// Evaluates a collection of cards that has not been parsed into a [Hand].
    ///
    /// Only the number of cards is checked, callers should build a [Hand]
    /// with [parse_hand](crate::parse_hand) and use [HandEvaluation::eval].
    pub fn eval_cards(cards: &[Card]) -> Result<Self, EvalError> {
        let cards: &[Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| EvalError::InvalidHandShape(cards.len()))?;
        Ok(Self::eval_five(cards))
    }

    fn eval_five(cards: &[Card; Hand::SIZE]) -> Self {
        let hand = cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let stats = HandStats::new(cards);
        trace!("Hand {hand} {stats:?}");

        let category = Category::classify(&stats);
        debug!("Hand {hand} classified as {category}");

        // Stable sort, cards with the same rank keep the input order.
        let mut ordered = *cards;
        ordered.sort_by_key(|c| Reverse((stats.rank_count(c.rank()), c.rank())));

        let result = ordered.map(|c| CardScore::new(c, category, stats.rank_count(c.rank())));

        Self {
            hand,
            category,
            result,
        }
    }

    /// The hand cards joined by a space.
    pub fn hand(&self) -> &str {
        &self.hand
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The five scored slots.
    pub fn result(&self) -> &[CardScore; Hand::SIZE] {
        &self.result
    }

    /// The hand headline score, this is the score of the first slot.
    pub fn score(&self) -> u32 {
        self.result[0].score
    }

    /// Checks if this is an ace high straight flush.
    pub fn is_royal(&self) -> bool {
        self.category == Category::StraightFlush && self.result[0].card.rank() == Rank::Ace
    }

    /// The slot for the given card.
    pub fn score_of(&self, card: Card) -> Option<&CardScore> {
        self.result.iter().find(|s| s.card == card)
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.hand, self.category)?;
        if self.is_royal() {
            write!(f, " (Royal Flush)")?;
        }

        for slot in &self.result {
            write!(f, "\n  {} {:>4}  {}", slot.card, slot.score, slot.description)?;
        }

        Ok(())
    }
}
