// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks and rank classes.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    EvalError,
    table::{
        MAX_FLUSH, MAX_FOUR_OF_A_KIND, MAX_FULL_HOUSE, MAX_HIGH_CARD, MAX_PAIR,
        MAX_STRAIGHT, MAX_STRAIGHT_FLUSH, MAX_THREE_OF_A_KIND, MAX_TWO_PAIR,
    },
};

/// The rank of a hand in the range [1, 7462].
///
/// Ranks are compared numerically so that a *lower* rank is a *stronger* hand:
///
/// ```
/// # use showdown_eval::*;
/// let royal = HandRank::new(1).unwrap();
/// let worst = HandRank::new(7462).unwrap();
/// assert!(royal < worst);
/// assert!(royal.is_better_than(worst));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HandRank(u16);

impl HandRank {
    /// The strongest rank, a royal flush.
    pub const BEST: HandRank = HandRank(1);

    /// The weakest rank, 7-5-4-3-2 unsuited.
    pub const WORST: HandRank = HandRank(MAX_HIGH_CARD);

    /// Creates a rank checking it is in the [1, 7462] range.
    pub fn new(value: u16) -> Result<Self, EvalError> {
        if (1..=MAX_HIGH_CARD).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EvalError::InvalidRank(value))
        }
    }

    /// Creates a rank from a lookup table value.
    pub(crate) const fn from_table(value: u16) -> Self {
        Self(value)
    }

    /// The numeric rank value.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The class for this rank.
    pub fn class(&self) -> RankClass {
        RankClass::all()
            .find(|class| self.0 <= class.max_rank())
            .unwrap_or(RankClass::HighCard)
    }

    /// The fraction of hand classes weaker than this rank, see [percentile].
    pub fn percentile(&self) -> f64 {
        percentile(self.0)
    }

    /// Checks if this hand beats `other`.
    pub fn is_better_than(&self, other: HandRank) -> bool {
        self.0 < other.0
    }
}

impl TryFrom<u16> for HandRank {
    type Error = EvalError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HandRank> for u16 {
    fn from(rank: HandRank) -> Self {
        rank.0
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.class(), self.0)
    }
}

/// The class of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankClass {
    /// Five cards in sequence of the same suit.
    StraightFlush = 1,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three of a kind and a pair.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five cards in sequence.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// Two cards of the same rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl RankClass {
    /// Returns all classes from the strongest to the weakest.
    pub fn all() -> impl DoubleEndedIterator<Item = RankClass> {
        use RankClass::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ]
        .into_iter()
    }

    /// The class id, 1 for a straight flush up to 9 for a high card.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// The weakest rank in this class, inclusive.
    pub fn max_rank(&self) -> u16 {
        match self {
            RankClass::StraightFlush => MAX_STRAIGHT_FLUSH,
            RankClass::FourOfAKind => MAX_FOUR_OF_A_KIND,
            RankClass::FullHouse => MAX_FULL_HOUSE,
            RankClass::Flush => MAX_FLUSH,
            RankClass::Straight => MAX_STRAIGHT,
            RankClass::ThreeOfAKind => MAX_THREE_OF_A_KIND,
            RankClass::TwoPair => MAX_TWO_PAIR,
            RankClass::Pair => MAX_PAIR,
            RankClass::HighCard => MAX_HIGH_CARD,
        }
    }

    /// The display name of this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankClass::StraightFlush => "Straight Flush",
            RankClass::FourOfAKind => "Four of a Kind",
            RankClass::FullHouse => "Full House",
            RankClass::Flush => "Flush",
            RankClass::Straight => "Straight",
            RankClass::ThreeOfAKind => "Three of a Kind",
            RankClass::TwoPair => "Two Pair",
            RankClass::Pair => "Pair",
            RankClass::HighCard => "High Card",
        }
    }
}

impl fmt::Display for RankClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the class of a rank.
///
/// Ranks are checked against the classes upper bounds from the strongest class
/// to the weakest, bounds are inclusive. Returns [EvalError::InvalidRank] for 0
/// and ranks above 7462.
pub fn classify(rank: u16) -> Result<RankClass, EvalError> {
    HandRank::new(rank).map(|rank| rank.class())
}

/// Returns the class name for a rank (i.e. "Full House").
pub fn rank_to_string(rank: u16) -> Result<&'static str, EvalError> {
    classify(rank).map(|class| class.as_str())
}

/// The percentile strength of a rank.
///
/// This is `1 - rank / 7462` so a royal flush is close to 1.0 and the worst
/// high card is 0.0.
pub fn percentile(rank: u16) -> f64 {
    1.0 - f64::from(rank) / f64::from(MAX_HIGH_CARD)
}
