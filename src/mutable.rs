//! Write capability for decks.
//!
//! A [`MutableDeck`] is the only type whose contents change after
//! construction. Writes perform no uniqueness check, so duplicates appear as
//! soon as a card is written over a different one.

use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use log::{debug, trace};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::write_list;
use crate::error::DeckError;
use crate::sequence::{CardSequence, Iter, resolve};
use crate::style::CardStyle;
use crate::sync::Mutex;

/// A deck that accepts positional writes.
///
/// Writes go through [`CardSequence::set`] or through `IndexMut`
/// (`deck[i] = card`). The latter panics out of range and is what lets
/// `rand`'s `choose_mut` hand out a writable slot.
///
/// Equality compares cards only; the attached style is ignored.
///
/// ```
/// use frenchdeck::{Card, CardSequence, Deck};
///
/// let mut deck = Deck::new().into_mutable();
/// deck.set(0, Card::new("A", "spades")).unwrap();
/// assert_eq!(deck.get(0).unwrap(), &Card::new("A", "spades"));
/// assert_eq!(deck.distinct_count(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct MutableDeck {
    cards: Vec<Card>,
    style: CardStyle,
}

impl MutableDeck {
    pub(crate) fn from_parts(cards: Vec<Card>, style: CardStyle) -> Self {
        Self { cards, style }
    }

    /// Attaches a display style.
    #[must_use]
    pub fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn write(&mut self, index: usize, card: Card) -> Card {
        trace!("write {card:?} at {index}");
        mem::replace(&mut self.cards[index], card)
    }

    /// Shuffles the deck in place with a Fisher-Yates pass built on
    /// positional writes.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            if i == j {
                continue;
            }
            let picked = self.cards[j].clone();
            let displaced = self.write(i, picked);
            self.write(j, displaced);
        }
        debug!("shuffled {} cards", self.cards.len());
    }

    /// Shuffles the deck with a deterministic generator seeded from `seed`.
    ///
    /// ```
    /// use frenchdeck::Deck;
    ///
    /// let mut a = Deck::new().into_mutable();
    /// let mut b = Deck::new().into_mutable();
    /// a.shuffle_with_seed(7);
    /// b.shuffle_with_seed(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Wraps the deck for use from more than one thread.
    #[must_use]
    pub fn into_shared(self) -> SharedDeck {
        SharedDeck::new(self)
    }
}

impl PartialEq for MutableDeck {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for MutableDeck {}

impl CardSequence for MutableDeck {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    fn style(&self) -> CardStyle {
        self.style
    }

    fn set(&mut self, position: isize, card: Card) -> Result<Card, DeckError> {
        let len = self.cards.len();
        let index = resolve(position, len).ok_or(DeckError::IndexOutOfRange { position, len })?;
        Ok(self.write(index, card))
    }
}

/// Panics when `index` is out of bounds, like slice indexing.
impl Index<usize> for MutableDeck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

/// Panics when `index` is out of bounds, like slice indexing.
impl IndexMut<usize> for MutableDeck {
    fn index_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }
}

impl IndexedRandom for MutableDeck {
    fn len(&self) -> usize {
        self.cards.len()
    }
}

impl<'a> IntoIterator for &'a MutableDeck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, MutableDeck>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MutableDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self)
    }
}

/// A [`MutableDeck`] behind a mutex, so `set` can be called through a
/// shared reference.
///
/// ```
/// use frenchdeck::{Card, Deck};
///
/// let shared = Deck::new().into_mutable().into_shared();
/// let old = shared.set(-1, Card::new("2", "spades")).unwrap();
/// assert_eq!(old, Card::new("A", "hearts"));
/// assert_eq!(shared.get(-1).unwrap(), Card::new("2", "spades"));
/// ```
pub struct SharedDeck {
    inner: Mutex<MutableDeck>,
}

impl SharedDeck {
    /// Wraps `deck`.
    #[must_use]
    pub fn new(deck: MutableDeck) -> Self {
        Self {
            inner: Mutex::new(deck),
        }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a copy of the card at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] when `position` is out of range.
    pub fn get(&self, position: isize) -> Result<Card, DeckError> {
        self.inner.lock().get(position).cloned()
    }

    /// Replaces the card at `position` under the lock.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] when `position` is out of range.
    pub fn set(&self, position: isize, card: Card) -> Result<Card, DeckError> {
        self.inner.lock().set(position, card)
    }

    /// Returns a copy of every card in the current order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.inner.lock().cards().to_vec()
    }

    /// Unwraps the deck.
    #[must_use]
    pub fn into_inner(self) -> MutableDeck {
        self.inner.into_inner()
    }
}
