// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks lookup tables.
//!
//! There are 7462 distinct 5-cards hands, the tables map the prime product
//! signature of a hand to its rank, with 1 the royal flush and 7462 the
//! 7-5-4-3-2 unsuited. Flushes are looked up by the product of the primes of
//! their rank pattern, all other hands by the product of the cards primes,
//! see [Card](showdown_cards::Card) for the cards encoding.
use ahash::AHashMap;
use log::debug;
use showdown_cards::{PRIMES, prime_product_from_rankbits};

/// Worst straight flush rank.
pub const MAX_STRAIGHT_FLUSH: u16 = 10;
/// Worst four of a kind rank.
pub const MAX_FOUR_OF_A_KIND: u16 = 166;
/// Worst full house rank.
pub const MAX_FULL_HOUSE: u16 = 322;
/// Worst flush rank.
pub const MAX_FLUSH: u16 = 1599;
/// Worst straight rank.
pub const MAX_STRAIGHT: u16 = 1609;
/// Worst three of a kind rank.
pub const MAX_THREE_OF_A_KIND: u16 = 2467;
/// Worst two pair rank.
pub const MAX_TWO_PAIR: u16 = 3325;
/// Worst pair rank.
pub const MAX_PAIR: u16 = 6185;
/// Worst high card rank, this is also the worst rank.
pub const MAX_HIGH_CARD: u16 = 7462;

/// Rank patterns of the straights from the ace high to the wheel.
const STRAIGHTS: [u32; 10] = [
    0x1F00, 0x0F80, 0x07C0, 0x03E0, 0x01F0, 0x00F8, 0x007C, 0x003E, 0x001F, 0x100F,
];

/// The flushes and unsuited lookup tables.
///
/// The tables are built once, usually at startup, and are read only after
/// construction so that a table can be shared by evaluators running on
/// different threads.
#[derive(Debug, Clone)]
pub struct LookupTable {
    flush: AHashMap<u32, u16>,
    unsuited: AHashMap<u32, u16>,
}

impl LookupTable {
    /// Number of entries in the flushes table.
    pub const FLUSH_ENTRIES: usize = 1287;
    /// Number of entries in the unsuited table.
    pub const UNSUITED_ENTRIES: usize = 6175;

    /// Builds the lookup tables.
    pub fn new() -> Self {
        let mut table = Self {
            flush: AHashMap::with_capacity(Self::FLUSH_ENTRIES),
            unsuited: AHashMap::with_capacity(Self::UNSUITED_ENTRIES),
        };

        table.add_distinct_ranks();
        table.add_multiples();

        debug!(
            "Built lookup tables flush={} unsuited={}",
            table.flush.len(),
            table.unsuited.len()
        );

        table
    }

    /// The rank of a flush given the prime product of its rank pattern.
    #[inline]
    pub fn flush_rank(&self, prime_product: u32) -> Option<u16> {
        self.flush.get(&prime_product).copied()
    }

    /// The rank of a non flush hand given the prime product of its cards.
    #[inline]
    pub fn unsuited_rank(&self, prime_product: u32) -> Option<u16> {
        self.unsuited.get(&prime_product).copied()
    }

    /// Number of entries in the flushes table.
    pub fn flush_len(&self) -> usize {
        self.flush.len()
    }

    /// Number of entries in the unsuited table.
    pub fn unsuited_len(&self) -> usize {
        self.unsuited.len()
    }

    /// Adds hands with five distinct ranks, these are the straight flushes
    /// and flushes in the flush table, and the straights and high cards in
    /// the unsuited table as they share the same rank patterns.
    fn add_distinct_ranks(&mut self) {
        let straights = STRAIGHTS.map(prime_product_from_rankbits);
        let last = fill(&mut self.flush, 1, straights);
        debug_assert_eq!(last, MAX_STRAIGHT_FLUSH);

        let last = fill(&mut self.unsuited, MAX_FLUSH + 1, straights);
        debug_assert_eq!(last, MAX_STRAIGHT);

        let others = || {
            rank_patterns(5, 0)
                .filter(|p| !STRAIGHTS.contains(p))
                .map(prime_product_from_rankbits)
        };

        let last = fill(&mut self.flush, MAX_FULL_HOUSE + 1, others());
        debug_assert_eq!(last, MAX_FLUSH);

        let last = fill(&mut self.unsuited, MAX_PAIR + 1, others());
        debug_assert_eq!(last, MAX_HIGH_CARD);
    }

    /// Adds hands with at least a pair, these never make a flush.
    fn add_multiples(&mut self) {
        let quads = ranks_desc().flat_map(|quad| {
            ranks_desc()
                .filter(move |&kicker| kicker != quad)
                .map(move |kicker| PRIMES[quad].pow(4) * PRIMES[kicker])
        });
        let last = fill(&mut self.unsuited, MAX_STRAIGHT_FLUSH + 1, quads);
        debug_assert_eq!(last, MAX_FOUR_OF_A_KIND);

        let full_houses = ranks_desc().flat_map(|trips| {
            ranks_desc()
                .filter(move |&pair| pair != trips)
                .map(move |pair| PRIMES[trips].pow(3) * PRIMES[pair].pow(2))
        });
        let last = fill(&mut self.unsuited, MAX_FOUR_OF_A_KIND + 1, full_houses);
        debug_assert_eq!(last, MAX_FULL_HOUSE);

        let trips = ranks_desc().flat_map(|trips| {
            rank_patterns(2, 1 << trips)
                .map(move |kickers| PRIMES[trips].pow(3) * prime_product_from_rankbits(kickers))
        });
        let last = fill(&mut self.unsuited, MAX_STRAIGHT + 1, trips);
        debug_assert_eq!(last, MAX_THREE_OF_A_KIND);

        let two_pairs = rank_patterns(2, 0).flat_map(|pairs| {
            ranks_desc()
                .filter(move |&kicker| pairs & (1 << kicker) == 0)
                .map(move |kicker| prime_product_from_rankbits(pairs).pow(2) * PRIMES[kicker])
        });
        let last = fill(&mut self.unsuited, MAX_THREE_OF_A_KIND + 1, two_pairs);
        debug_assert_eq!(last, MAX_TWO_PAIR);

        let pairs = ranks_desc().flat_map(|pair| {
            rank_patterns(3, 1 << pair)
                .map(move |kickers| PRIMES[pair].pow(2) * prime_product_from_rankbits(kickers))
        });
        let last = fill(&mut self.unsuited, MAX_TWO_PAIR + 1, pairs);
        debug_assert_eq!(last, MAX_PAIR);
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank indices from the ace down to the deuce.
fn ranks_desc() -> impl Iterator<Item = usize> + Clone {
    (0..PRIMES.len()).rev()
}

/// All 13 bits rank patterns with `count` bits set that don't overlap
/// `exclude`, from the strongest to the weakest.
///
/// Patterns with the same number of bits sorted in descending numeric order
/// are sorted by their highest rank, then the next highest, and so on.
fn rank_patterns(count: u32, exclude: u32) -> impl Iterator<Item = u32> {
    (0..1u32 << PRIMES.len())
        .rev()
        .filter(move |p| p.count_ones() == count && p & exclude == 0)
}

/// Assigns consecutive ranks starting from `first` to each product and
/// returns the last assigned rank.
fn fill<I>(map: &mut AHashMap<u32, u16>, first: u16, products: I) -> u16
where
    I: IntoIterator<Item = u32>,
{
    let mut rank = first;
    for product in products {
        let prev = map.insert(product, rank);
        debug_assert!(prev.is_none(), "duplicate product {product}");
        rank += 1;
    }

    rank - 1
}
