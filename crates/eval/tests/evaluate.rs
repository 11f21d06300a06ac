// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use ahash::AHashMap;
use handrank_eval::*;

fn eval(text: &str) -> HandEvaluation {
    HandEvaluation::eval(&parse_hand(text).unwrap())
}

#[test]
fn text_to_evaluation() {
    let tests = [
        ("2D 3D 4D 5D 6D", Category::StraightFlush, 906),
        ("TD JD QD KD AD", Category::StraightFlush, 914),
        ("2D 2C 2S 2H 6D", Category::FourOfAKind, 802),
        ("KS KC 5D KH 5S", Category::FullHouse, 713),
        ("3C 7C TC QC AC", Category::Flush, 614),
        ("6H 7D 8S 9C TH", Category::Straight, 510),
        ("QS 2C QD 5H QH", Category::ThreeOfAKind, 412),
        ("4S 4C JD JH 8S", Category::TwoPair, 311),
        ("AS AC 5D 8H 9S", Category::OnePair, 214),
        ("2S 5C 9D JH QS", Category::HighCard, 112),
    ];

    for (text, category, score) in tests {
        let e = eval(text);
        assert_eq!(e.hand(), text);
        assert_eq!(e.category(), category, "{text}");
        assert_eq!(e.score(), score, "{text}");
    }
}

#[test]
fn parse_errors_give_no_evaluation() {
    assert!(matches!(
        "2D 3D PP 5D 6D".parse::<Hand>(),
        Err(ParseError::InvalidCard(card)) if card == "PP"
    ));
    assert!(matches!(
        parse_hand("2D 3D 4D 5D"),
        Err(ParseError::WrongCardCount(4))
    ));
    assert!(matches!(
        parse_hand("2D 3D 4D 5D 2D"),
        Err(ParseError::DuplicateCard(card)) if card == "2D"
    ));
}

#[test]
fn random_hands() {
    let mut rng = rand::rng();
    for _ in 0..1_000 {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hand = deck.deal_hand().unwrap();
        let e = HandEvaluation::eval(&hand);

        // The evaluation text parses back to the same hand.
        assert_eq!(e.hand().parse::<Hand>().unwrap(), hand);

        // Every card has exactly one slot.
        for card in &hand {
            assert_eq!(e.result().iter().filter(|s| s.card() == *card).count(), 1);
        }

        // The headline score is within the category tier.
        let base = e.category().base_score();
        assert!((base + 2..=base + 14).contains(&e.score()));
    }
}

#[test]
fn all_hands_categories() {
    let mut counts = AHashMap::<Category, usize>::default();
    Deck::default().for_each_hand(|hand| {
        let stats = HandStats::new(hand.cards());
        *counts.entry(Category::classify(&stats)).or_default() += 1;
    });

    let expected = [
        (Category::StraightFlush, 36),
        (Category::FourOfAKind, 624),
        (Category::FullHouse, 3_744),
        (Category::Flush, 5_112),
        (Category::Straight, 9_180),
        (Category::ThreeOfAKind, 54_912),
        (Category::TwoPair, 123_552),
        (Category::OnePair, 1_098_240),
        (Category::HighCard, 1_303_560),
    ];

    for (category, count) in expected {
        assert_eq!(counts.get(&category).copied(), Some(count), "{category}");
    }
    assert_eq!(counts.values().sum::<usize>(), 2_598_960);
}
