//! Card value type and the canonical rank and suit tables.

use alloc::borrow::Cow;
use core::fmt;

/// Ranks in deck-construction order, lowest first.
pub const RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Suits in deck-construction order.
pub const SUITS: [&str; 4] = ["spades", "diamonds", "clubs", "hearts"];

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();

/// Returns the position of `rank` in [`RANKS`].
///
/// ```
/// use frenchdeck::card::rank_index;
///
/// assert_eq!(rank_index("2"), Some(0));
/// assert_eq!(rank_index("A"), Some(12));
/// assert_eq!(rank_index("Charmander"), None);
/// ```
#[must_use]
pub fn rank_index(rank: &str) -> Option<usize> {
    RANKS.iter().position(|&r| r == rank)
}

/// Returns the position of `suit` in [`SUITS`].
#[must_use]
pub fn suit_index(suit: &str) -> Option<usize> {
    SUITS.iter().position(|&s| s == suit)
}

/// A playing card.
///
/// Equality, hashing and ordering all come from the `(rank, suit)` pair
/// compared as strings, so `"10"` sorts before `"2"`. Use one of the
/// strategies in [`crate::order`] for a game-meaningful order.
///
/// Neither field is validated; any string is accepted.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Cow<'static, str>,
    suit: Cow<'static, str>,
}

impl Card {
    /// Field names in positional order.
    pub const FIELDS: [&'static str; 2] = ["rank", "suit"];

    /// Creates a new card.
    ///
    /// ```
    /// use frenchdeck::Card;
    ///
    /// let card = Card::new("Q", "hearts");
    /// assert_eq!(card.rank(), "Q");
    /// assert_eq!(card.suit(), "hearts");
    /// ```
    #[must_use]
    pub fn new(rank: impl Into<Cow<'static, str>>, suit: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
        }
    }

    /// Creates a card from borrowed static strings without allocating.
    #[must_use]
    pub const fn from_static(rank: &'static str, suit: &'static str) -> Self {
        Self {
            rank: Cow::Borrowed(rank),
            suit: Cow::Borrowed(suit),
        }
    }

    /// The rank of the card.
    #[must_use]
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// The suit of the card.
    #[must_use]
    pub fn suit(&self) -> &str {
        &self.suit
    }

    /// Positional field access: `0` is the rank, `1` is the suit.
    ///
    /// ```
    /// use frenchdeck::Card;
    ///
    /// let card = Card::new("7", "clubs");
    /// assert_eq!(card.field(0), Some("7"));
    /// assert_eq!(card.field(1), Some("clubs"));
    /// assert_eq!(card.field(2), None);
    /// ```
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(self.rank()),
            1 => Some(self.suit()),
            _ => None,
        }
    }

    /// Returns a copy of this card with a different rank.
    #[must_use]
    pub fn with_rank(&self, rank: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rank: rank.into(),
            suit: self.suit.clone(),
        }
    }

    /// Returns a copy of this card with a different suit.
    #[must_use]
    pub fn with_suit(&self, suit: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rank: self.rank.clone(),
            suit: suit.into(),
        }
    }

    /// Splits the card into its `(rank, suit)` pair.
    #[must_use]
    pub fn into_parts(self) -> (Cow<'static, str>, Cow<'static, str>) {
        (self.rank, self.suit)
    }
}

impl<R, S> From<(R, S)> for Card
where
    R: Into<Cow<'static, str>>,
    S: Into<Cow<'static, str>>,
{
    fn from((rank, suit): (R, S)) -> Self {
        Self::new(rank, suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(rank='{}', suit='{}')", self.rank, self.suit)
    }
}

/// Without an attached style a card prints in its debug form.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
