//! The read-only card sequence contract.
//!
//! A type only has to report its length and hand out cards by index; negative
//! positions, slicing, membership, iteration and rendering are all derived
//! from those two operations. Positional writes are refused unless a type
//! overrides [`CardSequence::set`].

use alloc::vec::Vec;
use core::iter::FusedIterator;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::DeckError;
use crate::style::{CardStyle, Styled};

/// Resolves a possibly negative position against `len`.
pub(crate) fn resolve(position: isize, len: usize) -> Option<usize> {
    let index = if position < 0 {
        len.checked_sub(position.unsigned_abs())?
    } else {
        position as usize
    };
    (index < len).then_some(index)
}

/// A `start:stop:step` slice descriptor.
///
/// Bounds may be negative (counted from the end) and are clamped to the
/// sequence, so slicing never fails. A step of zero is treated as one.
///
/// ```
/// use frenchdeck::Slice;
///
/// let aces = Slice::full().with_start(12).with_step(13);
/// assert_eq!(aces.indices(52).collect::<Vec<_>>(), [12, 25, 38, 51]);
/// assert_eq!(Slice::range(-2, 100).indices(52).collect::<Vec<_>>(), [50, 51]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    /// First position, or the natural start for the step direction.
    pub start: Option<isize>,
    /// Position to stop before, or the natural end for the step direction.
    pub stop: Option<isize>,
    /// Distance between taken positions.
    pub step: isize,
}

impl Default for Slice {
    fn default() -> Self {
        Self::full()
    }
}

impl Slice {
    /// A slice covering the whole sequence.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: 1,
        }
    }

    /// A `start..stop` slice with step one.
    #[must_use]
    pub const fn range(start: isize, stop: isize) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: 1,
        }
    }

    /// Sets the start bound.
    #[must_use]
    pub const fn with_start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the stop bound.
    #[must_use]
    pub const fn with_stop(mut self, stop: isize) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the step.
    ///
    /// A step of zero does not fail; it selects like a step of one.
    ///
    /// ```
    /// use frenchdeck::Slice;
    ///
    /// let zero = Slice::range(0, 3).with_step(0);
    /// assert_eq!(zero.indices(52).collect::<Vec<_>>(), [0, 1, 2]);
    /// ```
    #[must_use]
    pub const fn with_step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    /// Returns the positions this slice selects from a sequence of `len` items.
    #[must_use]
    pub fn indices(&self, len: usize) -> Indices {
        let len = len as isize;
        let step = if self.step == 0 { 1 } else { self.step };
        let clamp = |bound: isize, lower: isize, upper: isize| {
            let bound = if bound < 0 { bound + len } else { bound };
            bound.clamp(lower, upper)
        };

        let (start, stop) = if step > 0 {
            (
                self.start.map_or(0, |s| clamp(s, 0, len)),
                self.stop.map_or(len, |s| clamp(s, 0, len)),
            )
        } else {
            (
                self.start.map_or(len - 1, |s| clamp(s, -1, len - 1)),
                self.stop.map_or(-1, |s| clamp(s, -1, len - 1)),
            )
        };

        Indices {
            next: start,
            stop,
            step,
        }
    }
}

/// Iterator over the positions selected by a [`Slice`].
#[derive(Debug, Clone)]
pub struct Indices {
    next: isize,
    stop: isize,
    step: isize,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let remaining = if self.step > 0 {
            self.next < self.stop
        } else {
            self.next > self.stop
        };
        if !remaining {
            return None;
        }
        let index = self.next as usize;
        self.next = self.next.saturating_add(self.step);
        Some(index)
    }
}

impl FusedIterator for Indices {}

/// A sized, indexable sequence of cards.
///
/// Implementors provide [`len`](Self::len) and [`card_at`](Self::card_at);
/// everything else is derived from them.
pub trait CardSequence {
    /// Number of cards in the sequence.
    fn len(&self) -> usize;

    /// Returns the card at a zero-based index, or `None` past the end.
    fn card_at(&self, index: usize) -> Option<&Card>;

    /// Returns whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the card at `position`, counting from the end when negative.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] when `position` lies outside
    /// `[-len, len - 1]`.
    fn get(&self, position: isize) -> Result<&Card, DeckError> {
        let len = self.len();
        resolve(position, len)
            .and_then(|index| self.card_at(index))
            .ok_or(DeckError::IndexOutOfRange { position, len })
    }

    /// Returns the cards selected by `slice`, in slice order.
    fn slice(&self, slice: Slice) -> Vec<Card> {
        slice
            .indices(self.len())
            .filter_map(|index| self.card_at(index))
            .cloned()
            .collect()
    }

    /// Returns whether any card in the sequence equals `card`.
    ///
    /// This is a linear scan over every position.
    fn contains(&self, card: &Card) -> bool {
        self.iter().any(|c| c == card)
    }

    /// Returns a lazy iterator over the cards from position zero.
    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Returns a lazy iterator pairing every card with the sequence's style.
    fn styled_iter(&self) -> impl DoubleEndedIterator<Item = Styled<'_>> + '_ {
        let style = self.style();
        self.iter().map(move |card| card.styled(style))
    }

    /// Number of distinct cards in the sequence.
    fn distinct_count(&self) -> usize {
        self.iter().collect::<HashSet<_>>().len()
    }

    /// The style cards from this sequence are rendered in.
    fn style(&self) -> CardStyle {
        CardStyle::Debug
    }

    /// Returns the card at `position` paired with the sequence's style.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] when `position` is out of range.
    fn display(&self, position: isize) -> Result<Styled<'_>, DeckError> {
        let style = self.style();
        self.get(position).map(|card| card.styled(style))
    }

    /// Replaces the card at `position`, returning the previous card.
    ///
    /// # Errors
    ///
    /// Read-only sequences return [`DeckError::UnsupportedOperation`].
    fn set(&mut self, _position: isize, _card: Card) -> Result<Card, DeckError> {
        Err(DeckError::UnsupportedOperation)
    }
}

/// Iterator over a [`CardSequence`], reading one position at a time.
#[derive(Debug)]
pub struct Iter<'a, S: ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: CardSequence + ?Sized> Iter<'a, S> {
    fn new(seq: &'a S) -> Self {
        Self {
            seq,
            front: 0,
            back: seq.len(),
        }
    }
}

impl<S: ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S: CardSequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<&'a Card> {
        if self.front >= self.back {
            return None;
        }
        let card = self.seq.card_at(self.front)?;
        self.front += 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: CardSequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let card = self.seq.card_at(self.back - 1)?;
        self.back -= 1;
        Some(card)
    }
}

impl<S: CardSequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: CardSequence + ?Sized> FusedIterator for Iter<'_, S> {}
