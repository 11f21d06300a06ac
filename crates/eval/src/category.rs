// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::Serialize;
use std::fmt;

use crate::HandStats;

/// A poker hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    /// No other category matches.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five ranks in a run.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight where all cards have the same suit.
    StraightFlush,
}

impl Category {
    /// All categories from the highest to the lowest precedence.
    pub const PRECEDENCE: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// Returns the first category in precedence order that matches the stats.
    pub fn classify(stats: &HandStats) -> Category {
        Self::PRECEDENCE
            .into_iter()
            .find(|category| category.matches(stats))
            .unwrap_or(Category::HighCard)
    }

    /// Checks the category condition alone.
    ///
    /// Conditions overlap, a straight flush also matches [Category::Flush]
    /// and [Category::Straight], and are only meaningful when tried in
    /// [Category::PRECEDENCE] order.
    pub fn matches(&self, stats: &HandStats) -> bool {
        let shape = stats.shape();
        match self {
            Category::StraightFlush => stats.is_flush() && stats.is_straight(),
            Category::FourOfAKind => shape[0] == 4,
            Category::FullHouse => shape == [3, 2],
            Category::Flush => stats.is_flush(),
            Category::Straight => stats.is_straight(),
            Category::ThreeOfAKind => shape[0] == 3,
            Category::TwoPair => shape.starts_with(&[2, 2]),
            Category::OnePair => shape[0] == 2,
            Category::HighCard => true,
        }
    }

    /// The score offset for this category.
    pub fn base_score(&self) -> u32 {
        *self as u32 * 100
    }

    /// Checks if a card in a rank group of the given size is part of this
    /// category combination, other cards are kickers.
    pub fn is_made(&self, group_size: usize) -> bool {
        match self {
            Category::FourOfAKind => group_size == 4,
            Category::ThreeOfAKind => group_size == 3,
            Category::TwoPair | Category::OnePair => group_size == 2,
            Category::StraightFlush
            | Category::FullHouse
            | Category::Flush
            | Category::Straight
            | Category::HighCard => true,
        }
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
