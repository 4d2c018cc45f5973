//! The immutable 52-card deck.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use log::debug;
use rand::seq::IndexedRandom;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::mutable::MutableDeck;
use crate::sequence::{CardSequence, Iter};
use crate::style::CardStyle;

/// A read-only deck holding every `(rank, suit)` pair exactly once.
///
/// Cards are ordered suit-major in [`SUITS`] order, ranks ascending within
/// each suit. The deck never changes after construction; call
/// [`Deck::into_mutable`] to obtain a writable copy.
///
/// Equality compares cards only; the attached style is ignored.
///
/// ```
/// use frenchdeck::{Card, CardSequence, Deck};
///
/// let deck = Deck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.get(0).unwrap(), &Card::new("2", "spades"));
/// assert_eq!(deck.get(-1).unwrap(), &Card::new("A", "hearts"));
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    style: CardStyle,
}

impl Deck {
    /// Builds the deck in construction order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::from_static(rank, suit));
            }
        }

        debug!("built deck of {} cards", cards.len());
        Self {
            cards,
            style: CardStyle::default(),
        }
    }

    /// Attaches a display style used by [`CardSequence::display`],
    /// [`CardSequence::styled_iter`] and the deck's own `Display` impl.
    ///
    /// Cards returned by `get`, `iter` and `slice` are plain [`Card`]s and
    /// still print in debug form; pair them with the style through
    /// [`Card::styled`] or use the styled accessors above.
    ///
    /// ```
    /// use frenchdeck::{CardSequence, CardStyle, Deck};
    ///
    /// let deck = Deck::new().with_style(CardStyle::Of);
    /// assert_eq!(deck.display(-1).unwrap().to_string(), "A of hearts");
    /// ```
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

    /// Converts the deck into one that accepts positional writes.
    #[must_use]
    pub fn into_mutable(self) -> MutableDeck {
        debug!("deck opened for positional writes");
        MutableDeck::from_parts(self.cards, self.style)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Deck {}

impl CardSequence for Deck {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    fn style(&self) -> CardStyle {
        self.style
    }
}

/// Panics when `index` is out of bounds, like slice indexing.
impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

/// Random selection goes through `len` and `Index` only.
impl IndexedRandom for Deck {
    fn len(&self) -> usize {
        self.cards.len()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Deck>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the deck as a bracketed list in the attached style.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self)
    }
}

/// Writes `[card, card, ...]` using the sequence's style.
pub(crate) fn write_list<S: CardSequence + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    seq: &S,
) -> fmt::Result {
    let style = seq.style();
    f.write_str("[")?;
    for (i, card) in seq.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", card.styled(style))?;
    }
    f.write_str("]")
}
