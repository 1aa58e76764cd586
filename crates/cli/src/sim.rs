// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte-Carlo equity estimation.
use anyhow::{Result, bail};
use log::debug;
use showdown_eval::{Card, Deck, Evaluator, HandRank};

const BOARD_SIZE: usize = 5;
const BOARD_IDX: usize = 2;
const MAX_PLAYERS: usize = 9;

/// The equity of a hand from a number of simulated games.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Equity {
    /// Number of simulated games.
    pub games: usize,
    /// Games won outright.
    pub wins: usize,
    /// Games that ended in a split pot.
    pub ties: usize,
    /// Sum of the pot fractions won in split pots.
    pub tie_share: f64,
}

impl Equity {
    /// The fraction of games won outright.
    pub fn win_prob(&self) -> f64 {
        self.ratio(self.wins as f64)
    }

    /// The fraction of games that ended in a split pot.
    pub fn tie_prob(&self) -> f64 {
        self.ratio(self.ties as f64)
    }

    /// The expected pot fraction, wins plus split pot shares.
    pub fn equity(&self) -> f64 {
        self.ratio(self.wins as f64 + self.tie_share)
    }

    fn ratio(&self, value: f64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            value / self.games as f64
        }
    }
}

/// A simulation of hole cards against random opponents.
#[derive(Debug)]
pub struct Sim<'a> {
    evaluator: &'a Evaluator,
    pair: Vec<Card>,
    board: Vec<Card>,
    num_players: usize,
}

impl<'a> Sim<'a> {
    /// Creates a simulation for the given hole cards, known board cards and
    /// number of opponents.
    pub fn new(
        evaluator: &'a Evaluator,
        pair: Vec<Card>,
        board: Vec<Card>,
        num_players: usize,
    ) -> Result<Self> {
        if pair.len() != 2 {
            bail!("Expected 2 hole cards got {}", pair.len());
        }

        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            bail!("Expected 0, 3, 4 or 5 board cards got {}", board.len());
        }

        if !(1..=MAX_PLAYERS).contains(&num_players) {
            bail!("Expected 1 to {} opponents got {num_players}", MAX_PLAYERS);
        }

        let cards = pair.iter().chain(&board).collect::<Vec<_>>();
        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                bail!("Duplicate card {card}");
            }
        }

        Ok(Self {
            evaluator,
            pair,
            board,
            num_players,
        })
    }

    /// Runs the simulation for the given number of games.
    pub fn run(&self, samples: usize) -> Equity {
        // Remove cards from the deck so that we don't sample them.
        let mut deck = Deck::default();
        for c in self.pair.iter().chain(&self.board) {
            deck.remove(*c);
        }

        // Each sample has two cards for each opponent followed by the
        // missing board cards.
        let players_cards = 2 * self.num_players;
        let sample_size = players_cards + BOARD_SIZE - self.board.len();

        let mut hand = [self.pair[0]; BOARD_SIZE + BOARD_IDX];
        hand[BOARD_IDX..BOARD_IDX + self.board.len()].copy_from_slice(&self.board);

        let mut equity = Equity::default();
        deck.sample(samples, sample_size, |sample| {
            hand[BOARD_IDX + self.board.len()..].copy_from_slice(&sample[players_cards..]);

            // Evaluate hero hand.
            hand[..BOARD_IDX].copy_from_slice(&self.pair);
            let hero = self.evaluator.best_of_subsets(&hand);

            // Compare against other players hand.
            let mut best = HandRank::WORST;
            let mut tied = 0;
            for player in sample[..players_cards].chunks_exact(2) {
                hand[..BOARD_IDX].copy_from_slice(player);
                let rank = self.evaluator.best_of_subsets(&hand);
                best = best.min(rank);

                if rank == hero {
                    tied += 1;
                }
            }

            if hero < best {
                equity.wins += 1;
            } else if hero == best {
                equity.ties += 1;
                equity.tie_share += 1.0 / (tied + 1) as f64;
            }

            equity.games += 1;
        });

        debug!(
            "Simulated {} games against {} players equity={:.4}",
            equity.games,
            self.num_players,
            equity.equity()
        );

        equity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    #[test]
    fn pocket_aces() {
        let evaluator = Evaluator::default();
        let sim = Sim::new(&evaluator, cards("AS AH"), vec![], 1).unwrap();

        let equity = sim.run(10_000);
        assert_eq!(equity.games, 10_000);
        assert!((0.80..0.90).contains(&equity.equity()), "{equity:?}");
    }

    #[test]
    fn nuts_always_win() {
        let evaluator = Evaluator::default();
        let sim = Sim::new(&evaluator, cards("AS KS"), cards("QS JS TS"), 3).unwrap();

        let equity = sim.run(1_000);
        assert_eq!(equity.wins, 1_000);
        assert_eq!(equity.equity(), 1.0);
    }

    #[test]
    fn board_plays() {
        let evaluator = Evaluator::default();
        let sim = Sim::new(&evaluator, cards("2C 3D"), cards("TS JS QS KS AS"), 2).unwrap();

        let equity = sim.run(1_000);
        assert_eq!(equity.wins, 0);
        assert_eq!(equity.ties, 1_000);
        assert_eq!(equity.tie_prob(), 1.0);
        assert!((equity.equity() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_simulations() {
        let evaluator = Evaluator::default();

        assert!(Sim::new(&evaluator, cards("AS"), vec![], 1).is_err());
        assert!(Sim::new(&evaluator, cards("AS KS"), cards("2C 3C"), 1).is_err());
        assert!(Sim::new(&evaluator, cards("AS KS"), vec![], 0).is_err());
        assert!(Sim::new(&evaluator, cards("AS KS"), vec![], 10).is_err());
        assert!(Sim::new(&evaluator, cards("AS KS"), cards("AS 2C 3C"), 1).is_err());
    }

    #[test]
    fn empty_equity() {
        let equity = Equity::default();
        assert_eq!(equity.equity(), 0.0);
        assert_eq!(equity.win_prob(), 0.0);
    }
}
