//! A 52-card deck exposed as a read-only sequence, with optional `no_std`
//! support.
//!
//! [`Deck`] builds every `(rank, suit)` pair once and only offers reads
//! through [`CardSequence`]: length, positional and negative indexing,
//! slicing, membership and iteration. Extra behaviour is composed on rather
//! than built in: a [`CardStyle`] for display, [`MutableDeck`] for positional
//! writes, and the [`order`] strategies for sorting.
//!
//! # Example
//!
//! ```
//! use frenchdeck::{Card, CardSequence, Deck, RankMajor, Slice, order};
//!
//! let deck = Deck::new();
//! assert_eq!(deck.len(), 52);
//! assert!(deck.contains(&Card::new("Q", "hearts")));
//! assert_eq!(deck.slice(Slice::range(0, 2)), [Card::new("2", "spades"), Card::new("3", "spades")]);
//!
//! let sorted = order::sorted_by_key(&deck, &RankMajor::default());
//! assert_eq!(sorted[0], Card::new("2", "clubs"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod mutable;
pub mod options;
pub mod order;
pub mod sequence;
pub mod style;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, SUITS};
pub use deck::Deck;
pub use error::DeckError;
pub use mutable::{MutableDeck, SharedDeck};
pub use options::SuitOrder;
pub use order::{OrderKey, RankMajor, SuitMajor};
pub use sequence::{CardSequence, Iter, Slice};
pub use style::{CardStyle, Styled};
