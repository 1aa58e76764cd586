// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! Cards use the [Cactus Kev's][kevlink] encoding, the rank and suit bit masks
//! and the rank prime are exposed together with [prime_product_from_rankbits]
//! and [prime_product_from_hand] that compute the hand signatures used by the
//! evaluator lookup tables.
//!
//! The [Deck] type is used for shuffling, sampling, and iterating cards in the
//! deck, for example to iterate through all 7 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;

pub use card::{
    Card, PRIMES, ParseCardError, Rank, Suit, prime_product_from_hand,
    prime_product_from_rankbits,
};
pub use deck::Deck;
