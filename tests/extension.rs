//! Write capability integration tests.

extern crate alloc;

use alloc::sync::Arc;
use std::thread;

use frenchdeck::{Card, CardSequence, CardStyle, Deck, DeckError, MutableDeck};
use rand::SeedableRng;
use rand::seq::{IndexedMutRandom, IndexedRandom};
use rand_chacha::ChaCha8Rng;

fn card(rank: &'static str, suit: &'static str) -> Card {
    Card::new(rank, suit)
}

fn writable() -> MutableDeck {
    Deck::new().into_mutable()
}

#[test]
fn set_replaces_and_allows_duplicates() {
    let mut deck = writable();
    let old = deck.set(0, card("A", "spades")).unwrap();

    assert_eq!(old, card("2", "spades"));
    assert_eq!(deck.get(0).unwrap(), &card("A", "spades"));
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.distinct_count(), 51);
    assert!(!deck.contains(&card("2", "spades")));
}

#[test]
fn set_accepts_negative_positions() {
    let mut deck = writable();
    deck.set(-1, card("Charmander", "Fire")).unwrap();
    assert_eq!(deck.get(51).unwrap(), &card("Charmander", "Fire"));
}

#[test]
fn set_out_of_range_fails_without_writing() {
    let mut deck = writable();
    assert_eq!(
        deck.set(52, card("A", "spades")).unwrap_err(),
        DeckError::IndexOutOfRange {
            position: 52,
            len: 52
        }
    );
    assert_eq!(deck.distinct_count(), 52);
}

#[test]
fn index_mut_writes_in_place() {
    let mut deck = writable();
    deck[1] = card("K", "hearts");
    assert_eq!(deck[1], card("K", "hearts"));
    assert_eq!(deck.distinct_count(), 51);
}

#[test]
fn shuffle_keeps_every_card() {
    let mut deck = writable();
    deck.shuffle_with_seed(42);

    assert_eq!(deck.len(), 52);
    assert_eq!(deck.distinct_count(), 52);
    assert_ne!(deck.cards(), writable().cards());
    for c in &Deck::new() {
        assert!(deck.contains(c));
    }
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut a = writable();
    let mut b = writable();
    let mut rng_a = ChaCha8Rng::seed_from_u64(99);
    let mut rng_b = ChaCha8Rng::seed_from_u64(99);
    a.shuffle(&mut rng_a);
    b.shuffle(&mut rng_b);
    assert_eq!(a, b);
}

#[test]
fn random_choice_works_on_writable_decks() {
    let mut deck = writable();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let picked = deck.choose(&mut rng).unwrap().clone();
    assert!(deck.contains(&picked));

    let slot = deck.choose_mut(&mut rng).unwrap();
    *slot = card("Joker", "none");
    assert!(deck.contains(&card("Joker", "none")));
}

#[test]
fn style_survives_conversion() {
    let deck = Deck::new().with_style(CardStyle::Of).into_mutable();
    assert_eq!(deck.style(), CardStyle::Of);
    assert_eq!(deck.display(0).unwrap().to_string(), "2 of spades");

    let plain = writable().with_style(CardStyle::Debug);
    assert!(plain.to_string().starts_with("[Card(rank='2', suit='spades')"));
}

#[test]
fn shared_deck_serialises_writes() {
    let shared = Arc::new(writable().into_shared());

    let handles: Vec<_> = (0..4_isize)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.set(i, Card::new("A", "spades")))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.len(), 52);
    assert!(snapshot[..4].iter().all(|c| *c == card("A", "spades")));
    assert_eq!(shared.get(4).unwrap(), card("6", "spades"));
    assert_eq!(shared.len(), 52);
}

#[test]
fn shared_deck_unwraps() {
    let shared = writable().into_shared();
    shared.set(0, card("Q", "hearts")).unwrap();
    let deck = shared.into_inner();
    assert_eq!(deck[0], card("Q", "hearts"));
    assert!(shared_is_send_sync::<frenchdeck::SharedDeck>());
}

const fn shared_is_send_sync<T: Send + Sync>() -> bool {
    true
}

#[test]
fn writable_equality_ignores_style() {
    let plain = writable();
    let styled = writable().with_style(CardStyle::Of);
    assert_eq!(plain, styled);

    let mut changed = writable();
    changed.set(0, card("A", "spades")).unwrap();
    assert_ne!(plain, changed);
}
