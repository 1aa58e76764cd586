// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5, 6, and 7 cards poker hands. A 5 cards hand is evaluated with a
//! single table lookup, 6 and 7 cards hands are evaluated by taking the best
//! rank of all their 5 cards subsets (6 and 21 lookups).
//!
//! It provides an [Evaluator::evaluate] method that computes a hand rank
//! without extracting the best five cards, useful for computing odds and other
//! stats, and a slightly slower [Evaluator::best_hand] that also returns the
//! five best cards, useful for UIs to show a winning hand.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use std::sync::Arc;

use showdown_cards::{Card, Rank, Suit, prime_product_from_hand, prime_product_from_rankbits};

use crate::{EvalError, HandRank, LookupTable, rank};

/// The number of cards in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandSize {
    /// A 5 cards hand, hole cards and flop.
    Five = 5,
    /// A 6 cards hand, hole cards, flop and turn.
    Six = 6,
    /// A 7 cards hand, hole cards and full board.
    Seven = 7,
}

impl TryFrom<usize> for HandSize {
    type Error = EvalError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            5 => Ok(HandSize::Five),
            6 => Ok(HandSize::Six),
            7 => Ok(HandSize::Seven),
            n => Err(EvalError::InvalidHandSize(n)),
        }
    }
}

/// A poker hand evaluator.
///
/// The evaluator owns a shared reference to a [LookupTable], cloning an
/// evaluator doesn't rebuild the table so evaluators can be cheaply passed to
/// other threads:
///
/// ```
/// # use showdown_eval::*;
/// let evaluator = Evaluator::default();
/// let hole = Card::parse_many("AS AH").unwrap();
/// let board = Card::parse_many("AD KC KS").unwrap();
///
/// let rank = evaluator.evaluate(&hole, &board).unwrap();
/// assert_eq!(rank.class(), RankClass::FullHouse);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    table: Arc<LookupTable>,
}

impl Evaluator {
    /// Creates an evaluator that uses the given lookup table.
    pub fn new(table: Arc<LookupTable>) -> Self {
        Self { table }
    }

    /// The lookup table used by this evaluator.
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Evaluates the hand made of the hole and board cards.
    ///
    /// Returns [EvalError::InvalidHandSize] if the hole and board cards don't
    /// add up to 5, 6, or 7 cards. Cards must be distinct.
    pub fn evaluate(&self, hole: &[Card], board: &[Card]) -> Result<HandRank, EvalError> {
        let mut cards = [Card::new(Rank::Ace, Suit::Hearts); 7];
        let cards = join(hole, board, &mut cards)?;
        self.evaluate_cards(cards)
    }

    /// Evaluates a 5, 6, or 7 cards hand.
    pub fn evaluate_cards(&self, cards: &[Card]) -> Result<HandRank, EvalError> {
        match HandSize::try_from(cards.len())? {
            HandSize::Five => {
                let hand = <&[Card; 5]>::try_from(cards)
                    .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
                Ok(self.rank_five(hand))
            }
            HandSize::Six | HandSize::Seven => Ok(self.best_of_subsets(cards)),
        }
    }

    /// Evaluates the hand made of the hole and board cards and returns its
    /// rank together with the five cards that make the best hand.
    pub fn best_hand(
        &self,
        hole: &[Card],
        board: &[Card],
    ) -> Result<(HandRank, [Card; 5]), EvalError> {
        let mut cards = [Card::new(Rank::Ace, Suit::Hearts); 7];
        let cards = join(hole, board, &mut cards)?;

        let mut best_rank = HandRank::WORST;
        let mut best_hand = [cards[0]; 5];
        for_each_five(cards, |hand| {
            let rank = self.rank_five(hand);
            if rank <= best_rank {
                best_rank = rank;
                best_hand = *hand;
            }
        });

        Ok((best_rank, best_hand))
    }

    /// Evaluates a 5 cards hand.
    ///
    /// If all cards have the same suit the hand is looked up in the flushes
    /// table using the product of the primes of its ranks pattern, else it is
    /// looked up in the unsuited table using the product of the cards primes.
    ///
    /// # Panics
    ///
    /// Panics if the cards are not five distinct cards, as duplicate cards may
    /// produce a signature that is not in the tables.
    #[inline]
    pub fn rank_five(&self, cards: &[Card; 5]) -> HandRank {
        let [c1, c2, c3, c4, c5] = cards;
        let suits = c1.suit_mask() & c2.suit_mask() & c3.suit_mask() & c4.suit_mask();

        let rank = if suits & c5.suit_mask() != 0 {
            let bits = c1.rank_mask() | c2.rank_mask() | c3.rank_mask() | c4.rank_mask();
            self.table
                .flush_rank(prime_product_from_rankbits(bits | c5.rank_mask()))
        } else {
            self.table.unsuited_rank(prime_product_from_hand(cards))
        };

        match rank {
            Some(rank) => HandRank::from_table(rank),
            None => panic!("Invalid 5 cards hand {cards:?}"),
        }
    }

    /// Returns the best rank of all the 5 cards subsets of a 6 or 7 cards hand.
    ///
    /// # Panics
    ///
    /// Panics if there are less than 5 cards.
    pub fn best_of_subsets(&self, cards: &[Card]) -> HandRank {
        let mut best = HandRank::WORST;
        for_each_five(cards, |hand| {
            best = best.min(self.rank_five(hand));
        });

        best
    }

    /// Returns the class name for a rank, see [rank::rank_to_string].
    pub fn rank_to_string(&self, rank: u16) -> Result<&'static str, EvalError> {
        rank::rank_to_string(rank)
    }

    /// Returns the percentile strength of a rank, see [rank::percentile].
    pub fn percentile(&self, rank: u16) -> f64 {
        rank::percentile(rank)
    }
}

/// Copies the hole and board cards into `buf` checking the total size.
fn join<'a>(
    hole: &[Card],
    board: &[Card],
    buf: &'a mut [Card; 7],
) -> Result<&'a [Card], EvalError> {
    let size = hole.len() + board.len();
    HandSize::try_from(size)?;

    buf[..hole.len()].copy_from_slice(hole);
    buf[hole.len()..size].copy_from_slice(board);
    Ok(&buf[..size])
}

/// Calls `f` for each 5 cards subset of `cards`.
fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card; 5]),
{
    let n = cards.len();
    assert!(n >= 5, "a hand must have at least 5 cards");

    let mut hand = [cards[0]; 5];
    for c1 in 0..n - 4 {
        hand[0] = cards[c1];

        for c2 in (c1 + 1)..n - 3 {
            hand[1] = cards[c2];

            for c3 in (c2 + 1)..n - 2 {
                hand[2] = cards[c3];

                for c4 in (c3 + 1)..n - 1 {
                    hand[3] = cards[c4];

                    for c5 in (c4 + 1)..n {
                        hand[4] = cards[c5];
                        f(&hand);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RankClass;
    use ahash::AHashSet;
    use rand::seq::SliceRandom;
    use showdown_cards::Deck;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    fn eval(s: &str) -> HandRank {
        Evaluator::default().evaluate_cards(&cards(s)).unwrap()
    }

    #[test]
    fn best_and_worst_hands() {
        assert_eq!(eval("TS JS QS KS AS"), HandRank::BEST);
        assert_eq!(eval("AH KH QH JH TH 2C 3D"), HandRank::BEST);
        assert_eq!(eval("7S 5H 4D 3C 2S"), HandRank::WORST);
        assert_eq!(HandRank::BEST.value(), 1);
        assert_eq!(HandRank::WORST.value(), 7462);
    }

    #[test]
    fn hand_classes() {
        assert_eq!(eval("AS 2S 3S 4S 5S").value(), 10);
        assert_eq!(eval("AS 2S 3S 4S 5S").class(), RankClass::StraightFlush);
        assert_eq!(eval("9C 9D 9H 9S 2C").class(), RankClass::FourOfAKind);
        assert_eq!(eval("9C 9D 9H 2S 2C").class(), RankClass::FullHouse);
        assert_eq!(eval("9C JC 2C 4C 7C").class(), RankClass::Flush);
        assert_eq!(eval("AC 2D 3H 4S 5C").class(), RankClass::Straight);
        assert_eq!(eval("AC 2D 3H 4S 5C").value(), 1609);
        assert_eq!(eval("9C 9D 9H 3S 2C").class(), RankClass::ThreeOfAKind);
        assert_eq!(eval("9C 9D 3H 3S 2C").class(), RankClass::TwoPair);
        assert_eq!(eval("9C 9D 4H 3S 2C").class(), RankClass::Pair);
        assert_eq!(eval("9C 8D 4H 3S 2C").class(), RankClass::HighCard);

        // A straight flush beats four of a kind, wheel is the worst straight flush.
        assert!(eval("AS 2S 3S 4S 5S") < eval("AC AD AH AS KC"));
        // Better kicker wins.
        assert!(eval("AC AD 8H 4S 2C") < eval("AH AS 7H 4C 2D"));
        // Suits don't matter for unsuited hands.
        assert_eq!(eval("AC AD 8H 4S 2C"), eval("AH AS 8D 4C 2D"));
    }

    #[test]
    fn evaluate_hole_and_board() {
        let evaluator = Evaluator::default();

        let rank = evaluator
            .evaluate(&cards("AS AH"), &cards("AD KC KS"))
            .unwrap();
        assert_eq!(rank::rank_to_string(rank.value()), Ok("Full House"));

        let rank = evaluator
            .evaluate(&cards("2S 7D"), &cards("9C JH QS"))
            .unwrap();
        assert_eq!(evaluator.rank_to_string(rank.value()), Ok("High Card"));

        // Turn and river make a flush.
        let rank = evaluator
            .evaluate(&cards("2S 7S"), &cards("9S JH QS"))
            .unwrap();
        assert_eq!(rank.class(), RankClass::HighCard);

        let rank = evaluator
            .evaluate(&cards("2S 7S"), &cards("9S JH QS 3S"))
            .unwrap();
        assert_eq!(rank.class(), RankClass::Flush);
    }

    #[test]
    fn invalid_hand_size() {
        let evaluator = Evaluator::default();

        let res = evaluator.evaluate(&cards("AS AH"), &cards("AD KC"));
        assert_eq!(res, Err(EvalError::InvalidHandSize(4)));

        let res = evaluator.evaluate(&cards("AS AH"), &cards("AD KC KS QS JS 2D"));
        assert_eq!(res, Err(EvalError::InvalidHandSize(8)));

        let res = evaluator.evaluate(&[], &[]);
        assert_eq!(res, Err(EvalError::InvalidHandSize(0)));

        let res = evaluator.best_hand(&cards("AS"), &cards("AD KC KS"));
        assert_eq!(res, Err(EvalError::InvalidHandSize(4)));

        assert_eq!(HandSize::try_from(6), Ok(HandSize::Six));
        assert_eq!(HandSize::Seven as usize, 7);
    }

    #[test]
    fn all_five_cards_hands() {
        let evaluator = Evaluator::default();
        let mut counts = [0usize; 10];
        let mut ranks = AHashSet::default();

        Deck::default().for_each(5, |hand| {
            let rank = evaluator.evaluate_cards(hand).unwrap();
            assert!((1..=7462).contains(&rank.value()));
            counts[rank.class().id() as usize] += 1;
            ranks.insert(rank);
        });

        assert_eq!(ranks.len(), 7462);
        assert_eq!(
            &counts[1..],
            &[40, 624, 3744, 5108, 10200, 54912, 123552, 1098240, 1302540]
        );
    }

    #[test]
    fn order_invariance() {
        let evaluator = Evaluator::default();
        let mut rng = rand::rng();

        for k in 5..=7 {
            Deck::default().sample(1_000, k, |hand| {
                let rank = evaluator.evaluate_cards(hand).unwrap();

                let mut shuffled = hand.to_vec();
                for _ in 0..5 {
                    shuffled.shuffle(&mut rng);
                    assert_eq!(evaluator.evaluate_cards(&shuffled), Ok(rank));
                }

                // Any split between hole and board cards.
                let (hole, board) = shuffled.split_at(2);
                assert_eq!(evaluator.evaluate(hole, board), Ok(rank));
                let (hole, board) = shuffled.split_at(k);
                assert_eq!(evaluator.evaluate(hole, board), Ok(rank));
            });
        }
    }

    #[test]
    fn subsets_brute_force() {
        let evaluator = Evaluator::default();

        // Min over the 5 cards hands made by skipping one or two cards.
        let brute_force = |hand: &[Card]| {
            let n = hand.len();
            let mut best = u16::MAX;
            for skip1 in 0..n {
                for skip2 in skip1..n {
                    let five = hand
                        .iter()
                        .enumerate()
                        .filter(|&(idx, _)| idx != skip1 && idx != skip2)
                        .map(|(_, c)| *c)
                        .collect::<Vec<_>>();

                    if five.len() == 5 {
                        let five = <[Card; 5]>::try_from(five).unwrap();
                        best = best.min(evaluator.rank_five(&five).value());
                    }
                }
            }
            best
        };

        for k in [6, 7] {
            Deck::default().sample(2_000, k, |hand| {
                let rank = evaluator.evaluate_cards(hand).unwrap();
                assert_eq!(rank.value(), brute_force(hand));
                assert_eq!(evaluator.best_of_subsets(hand), rank);
            });
        }
    }

    #[test]
    fn best_five_cards() {
        let evaluator = Evaluator::default();

        let (rank, hand) = evaluator
            .best_hand(&cards("AS AH"), &cards("2D AD KC 3S KS"))
            .unwrap();
        assert_eq!(rank.class(), RankClass::FullHouse);

        let mut hand = hand.to_vec();
        hand.sort_by_key(|c| c.id());
        let mut expected = cards("AS AH AD KC KS");
        expected.sort_by_key(|c| c.id());
        assert_eq!(hand, expected);

        Deck::default().sample(1_000, 7, |cards| {
            let (rank, hand) = evaluator.best_hand(&cards[..2], &cards[2..]).unwrap();
            assert_eq!(evaluator.rank_five(&hand), rank);
            assert_eq!(evaluator.evaluate(&cards[..2], &cards[2..]), Ok(rank));
            assert!(hand.iter().all(|c| cards.contains(c)));
        });
    }

    #[test]
    fn shared_table() {
        let table = Arc::new(LookupTable::new());
        let evaluator = Evaluator::new(table.clone());
        assert_eq!(Arc::strong_count(&table), 2);

        // Evaluate from multiple threads using the same table.
        std::thread::scope(|s| {
            for _ in 0..4 {
                let evaluator = evaluator.clone();
                s.spawn(move || {
                    Deck::default().sample(1_000, 7, |hand| {
                        let rank = evaluator.evaluate_cards(hand).unwrap();
                        assert_eq!(rank, evaluator.best_of_subsets(hand));
                    });
                });
            }
        });

        assert_eq!(Arc::strong_count(&table), 2);
    }

    #[test]
    #[should_panic]
    fn duplicate_cards() {
        let evaluator = Evaluator::default();
        let hand = <[Card; 5]>::try_from(cards("AS AS AS AS AS")).unwrap();
        evaluator.rank_five(&hand);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn all_seven_cards_hands() {
        let evaluator = Evaluator::default();
        let mut counts = [0usize; 10];

        Deck::default().for_each(7, |hand| {
            let rank = evaluator.evaluate_cards(hand).unwrap();
            counts[rank.class().id() as usize] += 1;
        });

        assert_eq!(
            &counts[1..],
            &[
                41_584, 224_848, 3_473_184, 4_047_644, 6_180_020, 6_461_620, 31_433_400,
                58_627_800, 23_294_460
            ]
        );
    }
}
