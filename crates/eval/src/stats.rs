// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit counts for a hand.
use ahash::AHashMap;
use std::cmp::Reverse;

use handrank_cards::{Card, Hand, Rank, Suit};

/// Suit and rank counts of a five cards hand.
///
/// The maps iteration order is not used for any result, values are always
/// collected and sorted first.
#[derive(Debug, Clone)]
pub struct HandStats {
    suits: AHashMap<Suit, usize>,
    ranks: AHashMap<Rank, usize>,
}

impl HandStats {
    /// Computes the stats for the given cards.
    pub fn new(cards: &[Card; Hand::SIZE]) -> Self {
        let mut suits = AHashMap::with_capacity(4);
        let mut ranks = AHashMap::with_capacity(Hand::SIZE);

        for card in cards {
            *suits.entry(card.suit()).or_default() += 1;
            *ranks.entry(card.rank()).or_default() += 1;
        }

        Self { suits, ranks }
    }

    /// Number of cards with the given suit.
    pub fn suit_count(&self, suit: Suit) -> usize {
        self.suits.get(&suit).copied().unwrap_or_default()
    }

    /// Number of cards with the given rank.
    pub fn rank_count(&self, rank: Rank) -> usize {
        self.ranks.get(&rank).copied().unwrap_or_default()
    }

    /// Number of distinct suits.
    pub fn distinct_suits(&self) -> usize {
        self.suits.len()
    }

    /// Number of distinct ranks.
    pub fn distinct_ranks(&self) -> usize {
        self.ranks.len()
    }

    /// Ranks with their counts, largest group first and higher rank first
    /// between groups of the same size.
    pub fn groups(&self) -> Vec<(Rank, usize)> {
        let mut groups = self
            .ranks
            .iter()
            .map(|(&rank, &count)| (rank, count))
            .collect::<Vec<_>>();
        groups.sort_by_key(|&(rank, count)| Reverse((count, rank)));
        groups
    }

    /// The groups sizes in descending order, `[3, 2]` for a full house.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = self.ranks.values().copied().collect::<Vec<_>>();
        shape.sort_by_key(|&count| Reverse(count));
        shape
    }

    /// The highest rank in the hand.
    pub fn high_rank(&self) -> Option<Rank> {
        self.ranks.keys().max().copied()
    }

    /// The lowest rank in the hand.
    pub fn low_rank(&self) -> Option<Rank> {
        self.ranks.keys().min().copied()
    }

    /// All cards have the same suit.
    pub fn is_flush(&self) -> bool {
        self.distinct_suits() == 1
    }

    /// Five distinct ranks forming a run, the ace only counts high.
    pub fn is_straight(&self) -> bool {
        match (self.high_rank(), self.low_rank()) {
            (Some(high), Some(low)) if self.distinct_ranks() == Hand::SIZE => {
                high.value() - low.value() == 4
            }
            _ => false,
        }
    }
}
