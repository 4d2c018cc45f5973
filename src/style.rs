//! Display capability for cards.

use core::fmt;

use crate::card::Card;

/// How a card is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CardStyle {
    /// `Card(rank='Q', suit='hearts')`.
    #[default]
    Debug,
    /// `Q of hearts`.
    Of,
}

/// A card paired with the style it should be printed in.
///
/// ```
/// use frenchdeck::{Card, CardStyle};
///
/// let card = Card::new("Q", "hearts");
/// assert_eq!(card.styled(CardStyle::Of).to_string(), "Q of hearts");
/// assert_eq!(card.styled(CardStyle::Debug).to_string(), "Card(rank='Q', suit='hearts')");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Styled<'a> {
    card: &'a Card,
    style: CardStyle,
}

impl<'a> Styled<'a> {
    /// Pairs `card` with `style`.
    #[must_use]
    pub const fn new(card: &'a Card, style: CardStyle) -> Self {
        Self { card, style }
    }

    /// The wrapped card.
    #[must_use]
    pub const fn card(&self) -> &'a Card {
        self.card
    }

    /// The style used for rendering.
    #[must_use]
    pub const fn style(&self) -> CardStyle {
        self.style
    }
}

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            CardStyle::Debug => fmt::Debug::fmt(self.card, f),
            CardStyle::Of => write!(f, "{} of {}", self.card.rank(), self.card.suit()),
        }
    }
}

impl Card {
    /// Attaches a display style to this card.
    #[must_use]
    pub const fn styled(&self, style: CardStyle) -> Styled<'_> {
        Styled::new(self, style)
    }
}
