// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. This evaluator is a port of
//! the [Cactus Kev's][kevlink] poker evaluator, it maps a hand to a rank in the
//! range [1, 7462] where a lower rank is a stronger hand, 1 is a royal flush
//! and 7462 is 7-5-4-3-2 unsuited.
//!
//! To use the evaluator build a [LookupTable] once, share it with one or more
//! [Evaluator] and evaluate the hole and board cards:
//!
//! ```
//! # use std::sync::Arc;
//! # use showdown_eval::*;
//! let evaluator = Evaluator::new(Arc::new(LookupTable::new()));
//!
//! let hole = Card::parse_many("2S 7D").unwrap();
//! let board = Card::parse_many("9C JH QS").unwrap();
//! let rank = evaluator.evaluate(&hole, &board).unwrap();
//!
//! assert_eq!(rank_to_string(rank.value()).unwrap(), "High Card");
//! assert!(percentile(rank.value()) < 0.5);
//!
//! // Hands must have 5, 6, or 7 cards.
//! let res = evaluator.evaluate(&hole, &board[..2]);
//! assert_eq!(res, Err(EvalError::InvalidHandSize(4)));
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod evaluator;
pub mod rank;
pub mod table;

pub use error::EvalError;
pub use evaluator::{Evaluator, HandSize};
pub use rank::{HandRank, RankClass, classify, percentile, rank_to_string};
pub use table::LookupTable;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
