//! Suit ranking used by the ordering strategies.

use crate::card::SUITS;

/// A caller-chosen ranking of the four suits, lowest first.
///
/// A suit's weight is its position in the ranking.
///
/// ```
/// use frenchdeck::SuitOrder;
///
/// let order = SuitOrder::alphabetical();
/// assert_eq!(order.weight("clubs"), Some(0));
/// assert_eq!(order.weight("spades"), Some(3));
///
/// let order = SuitOrder::new(["hearts", "spades", "clubs", "diamonds"]);
/// assert_eq!(order.weight("hearts"), Some(0));
/// assert_eq!(order.weight("Fire"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitOrder {
    /// Suits from lowest to highest.
    pub suits: [&'static str; 4],
}

impl Default for SuitOrder {
    fn default() -> Self {
        Self::alphabetical()
    }
}

impl SuitOrder {
    /// Creates a ranking from suits listed lowest first.
    #[must_use]
    pub const fn new(suits: [&'static str; 4]) -> Self {
        Self { suits }
    }

    /// Clubs, diamonds, hearts, spades.
    #[must_use]
    pub const fn alphabetical() -> Self {
        Self::new(["clubs", "diamonds", "hearts", "spades"])
    }

    /// The order suits appear in a freshly built deck.
    #[must_use]
    pub const fn canonical() -> Self {
        Self::new(SUITS)
    }

    /// Returns the weight of `suit`, or `None` if it is not ranked.
    #[must_use]
    pub fn weight(&self, suit: &str) -> Option<usize> {
        self.suits.iter().position(|&s| s == suit)
    }
}
