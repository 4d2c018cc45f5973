//! Ordering strategies and sorting helpers.
//!
//! Sorting never touches the source sequence: every helper reads the cards
//! through iteration and returns a new `Vec`.
//!
//! The default [`Card`] order compares ranks as strings, which puts `"10"`
//! before `"2"`. The strategies here look ranks up in [`RANKS`] instead, so
//! they agree with deck-construction order.

use alloc::vec::Vec;

use crate::card::{Card, RANKS, SUITS, rank_index, suit_index};
use crate::options::SuitOrder;

/// Maps a card to an integer sort key.
///
/// `None` means the card's rank or suit is not in the canonical tables;
/// such cards sort before every known card.
pub trait OrderKey {
    /// Returns the key for `card`.
    fn key(&self, card: &Card) -> Option<usize>;
}

impl<F> OrderKey for F
where
    F: Fn(&Card) -> Option<usize>,
{
    fn key(&self, card: &Card) -> Option<usize> {
        self(card)
    }
}

/// Rank first, then suit weight: `rank_index * 4 + weight(suit)`.
///
/// ```
/// use frenchdeck::{Card, OrderKey, RankMajor};
///
/// let key = RankMajor::default();
/// assert_eq!(key.key(&Card::new("2", "clubs")), Some(0));
/// assert_eq!(key.key(&Card::new("A", "spades")), Some(51));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankMajor {
    /// Tie-break ranking among suits of the same rank.
    pub suits: SuitOrder,
}

impl RankMajor {
    /// Creates the strategy with the given suit ranking.
    #[must_use]
    pub const fn new(suits: SuitOrder) -> Self {
        Self { suits }
    }
}

impl OrderKey for RankMajor {
    fn key(&self, card: &Card) -> Option<usize> {
        let rank = rank_index(card.rank())?;
        let weight = self.suits.weight(card.suit())?;
        Some(rank * SUITS.len() + weight)
    }
}

/// Suit first, then rank: `position(suit) * 13 + rank_index`.
///
/// Suits are taken in the order given by a [`SuitOrder`]; the default is
/// alphabetical.
///
/// ```
/// use frenchdeck::{Card, OrderKey, SuitMajor, SuitOrder};
///
/// let key = SuitMajor::default();
/// assert_eq!(key.key(&Card::new("2", "clubs")), Some(0));
/// assert_eq!(key.key(&Card::new("A", "spades")), Some(51));
///
/// let key = SuitMajor::new(SuitOrder::canonical());
/// assert_eq!(key.key(&Card::new("3", "diamonds")), Some(14));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitMajor {
    /// Ranking of the suits, lowest first.
    pub suits: SuitOrder,
}

impl SuitMajor {
    /// Creates the strategy with the given suit ranking.
    #[must_use]
    pub const fn new(suits: SuitOrder) -> Self {
        Self { suits }
    }
}

impl OrderKey for SuitMajor {
    fn key(&self, card: &Card) -> Option<usize> {
        let suit = self.suits.weight(card.suit())?;
        let rank = rank_index(card.rank())?;
        Some(suit * RANKS.len() + rank)
    }
}

/// Suit position in deck-construction order, then rank.
///
/// Sorting a shuffled deck with this key restores construction order.
#[must_use]
pub fn construction_key(card: &Card) -> Option<usize> {
    let suit = suit_index(card.suit())?;
    let rank = rank_index(card.rank())?;
    Some(suit * RANKS.len() + rank)
}

/// Returns the cards in default (string-wise `(rank, suit)`) order.
///
/// ```
/// use frenchdeck::{Card, Deck, order};
///
/// let sorted = order::sorted(&Deck::new());
/// assert_eq!(sorted[0], Card::new("10", "clubs"));
/// assert_eq!(sorted[51], Card::new("Q", "spades"));
/// ```
#[must_use]
pub fn sorted<'a, I>(cards: I) -> Vec<Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut out: Vec<Card> = cards.into_iter().cloned().collect();
    out.sort();
    out
}

/// Returns the cards ordered by `key`. Equal keys keep their input order.
#[must_use]
pub fn sorted_by_key<'a, I, K>(cards: I, key: &K) -> Vec<Card>
where
    I: IntoIterator<Item = &'a Card>,
    K: OrderKey + ?Sized,
{
    let mut out: Vec<Card> = cards.into_iter().cloned().collect();
    out.sort_by_cached_key(|card| key.key(card));
    out
}
