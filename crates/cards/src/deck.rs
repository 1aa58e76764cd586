// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); 7];
        visit_ksubsets(&self.cards, k, 0, 0, &mut hand, &mut f);
    }

    /// Calls the `f` closure for `n` random k-cards hands.
    ///
    /// The cards in each hand are distinct, hands are sampled independently,
    /// if k is larger than the number of cards in the deck `f` is not called.
    pub fn sample<F>(&self, n: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut rng = SmallRng::from_os_rng();
        let mut hand = Vec::with_capacity(k);
        for _ in 0..n {
            hand.clear();
            hand.extend(self.cards.choose_multiple(&mut rng, k));
            f(&hand);
        }
    }
}

/// Fills `hand[depth..k]` with every increasing choice of cards starting at
/// `start` and calls `f` for each complete hand.
fn visit_ksubsets<F>(
    cards: &[Card],
    k: usize,
    depth: usize,
    start: usize,
    hand: &mut [Card; 7],
    f: &mut F,
) where
    F: FnMut(&[Card]),
{
    if depth == k {
        f(&hand[..k]);
        return;
    }

    // Leave enough cards for the remaining positions.
    let end = cards.len() + depth + 1 - k;
    for idx in start..end {
        hand[depth] = cards[idx];
        visit_ksubsets(cards, k, depth + 1, idx + 1, hand, f);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_deal() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut cards = HashSet::default();

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    // Goes through 133M hands, slow in debug mode.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        for card in Card::parse_many("AD KD QD TD JD 9D 8D 7D 6D 5D").unwrap() {
            deck.remove(card);
        }
        assert_eq!(deck.count(), 42);

        let mut count = 0;
        deck.for_each(6, |cards| {
            assert!(cards.iter().all(|c| c.suit() != Suit::Diamonds || c.rank() < Rank::Five));
            count += 1;
        });
        assert_eq!(count, 5_245_786);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();

        let mut count = 0;
        deck.sample(100, 7, |cards| {
            assert_eq!(cards.len(), 7);
            let unique = cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);

        // Not enough cards for a hand.
        let mut deck = Deck::default();
        while deck.count() > 4 {
            deck.deal();
        }

        deck.sample(10, 5, |_| panic!("unexpected sample"));

        // Hands larger than 7 cards.
        Deck::default().sample(10, 23, |cards| {
            assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 23);
        });
    }
}
