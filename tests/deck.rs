//! Read-only deck integration tests.

use std::collections::HashSet;

use frenchdeck::{Card, CardSequence, CardStyle, DECK_SIZE, Deck, DeckError, RANKS, SUITS, Slice};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

fn card(rank: &'static str, suit: &'static str) -> Card {
    Card::new(rank, suit)
}

#[test]
fn construction_is_complete_without_duplicates() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.distinct_count(), 52);

    let seen: HashSet<&Card> = deck.iter().collect();
    for suit in SUITS {
        for rank in RANKS {
            assert!(seen.contains(&card(rank, suit)), "missing {rank} of {suit}");
        }
    }
}

#[test]
fn construction_order_is_suit_major() {
    let deck = Deck::new();
    assert_eq!(deck.get(0).unwrap(), &card("2", "spades"));
    assert_eq!(deck.get(12).unwrap(), &card("A", "spades"));
    assert_eq!(deck.get(13).unwrap(), &card("2", "diamonds"));
    assert_eq!(deck.get(51).unwrap(), &card("A", "hearts"));
}

#[test]
fn negative_positions_count_from_the_end() {
    let deck = Deck::new();
    assert_eq!(deck.get(-1).unwrap(), &card("A", "hearts"));
    assert_eq!(deck.get(-52).unwrap(), &card("2", "spades"));
}

#[test]
fn out_of_range_positions_fail() {
    let deck = Deck::new();
    assert_eq!(
        deck.get(52).unwrap_err(),
        DeckError::IndexOutOfRange {
            position: 52,
            len: 52
        }
    );
    assert_eq!(
        deck.get(-53).unwrap_err(),
        DeckError::IndexOutOfRange {
            position: -53,
            len: 52
        }
    );
    assert!(deck.get(isize::MIN).is_err());
}

#[test]
fn slicing_matches_sequence_semantics() {
    let deck = Deck::new();
    assert_eq!(
        deck.slice(Slice::range(0, 3)),
        [card("2", "spades"), card("3", "spades"), card("4", "spades")]
    );

    let aces = deck.slice(Slice::full().with_start(12).with_step(13));
    assert_eq!(
        aces,
        [
            card("A", "spades"),
            card("A", "diamonds"),
            card("A", "clubs"),
            card("A", "hearts"),
        ]
    );

    let reversed = deck.slice(Slice::full().with_step(-1));
    assert_eq!(reversed.len(), 52);
    assert_eq!(reversed[0], card("A", "hearts"));
    assert_eq!(reversed[51], card("2", "spades"));

    let tail = deck.slice(Slice::full().with_start(-2));
    assert_eq!(tail, [card("K", "hearts"), card("A", "hearts")]);
}

#[test]
fn slice_bounds_are_clamped() {
    let deck = Deck::new();
    assert_eq!(deck.slice(Slice::range(-100, 100)).len(), 52);
    assert!(deck.slice(Slice::range(60, 70)).is_empty());
    assert!(deck.slice(Slice::range(10, 5)).is_empty());
    assert_eq!(deck.slice(Slice::range(0, 3).with_step(0)).len(), 3);
    assert_eq!(
        deck.slice(Slice::full().with_start(100).with_stop(49).with_step(-1)),
        [card("A", "hearts"), card("K", "hearts")]
    );
}

#[test]
fn membership_scans_the_deck() {
    let deck = Deck::new();
    assert!(deck.contains(&card("Q", "hearts")));
    assert!(!deck.contains(&card("Charmander", "Fire")));
}

#[test]
fn iteration_is_restartable_and_reversible() {
    let deck = Deck::new();

    let first: Vec<&Card> = deck.iter().take(2).collect();
    assert_eq!(first, [&card("2", "spades"), &card("3", "spades")]);

    let again = deck.iter().next().unwrap();
    assert_eq!(again, &card("2", "spades"));

    let last = deck.iter().rev().next().unwrap();
    assert_eq!(last, &card("A", "hearts"));

    assert_eq!(deck.iter().len(), 52);
    assert_eq!((&deck).into_iter().count(), 52);
}

#[test]
fn random_choice_uses_length_and_index() {
    let deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..20 {
        let picked = deck.choose(&mut rng).unwrap();
        assert!(deck.contains(picked));
    }
}

#[test]
fn base_deck_refuses_writes() {
    let mut deck = Deck::new();
    assert_eq!(
        deck.set(0, card("A", "spades")).unwrap_err(),
        DeckError::UnsupportedOperation
    );
    assert_eq!(deck.get(0).unwrap(), &card("2", "spades"));
}

#[test]
fn cards_render_in_debug_form_by_default() {
    let c = card("7", "diamonds");
    assert_eq!(format!("{c:?}"), "Card(rank='7', suit='diamonds')");
    assert_eq!(c.to_string(), "Card(rank='7', suit='diamonds')");
}

#[test]
fn attached_style_changes_rendering() {
    let deck = Deck::new().with_style(CardStyle::Of);
    assert_eq!(deck.display(0).unwrap().to_string(), "2 of spades");
    assert!(deck.display(52).is_err());

    let plain = Deck::new();
    assert_eq!(
        plain.display(0).unwrap().to_string(),
        "Card(rank='2', suit='spades')"
    );

    let listing = deck.to_string();
    assert!(listing.starts_with("[2 of spades, 3 of spades"));
    assert!(listing.ends_with("A of hearts]"));
}

#[test]
fn card_fields_by_name_and_position() {
    let c = card("J", "clubs");
    assert_eq!(c.rank(), "J");
    assert_eq!(c.suit(), "clubs");
    assert_eq!(c.field(0), Some("J"));
    assert_eq!(c.field(1), Some("clubs"));
    assert_eq!(c.field(2), None);
    assert_eq!(Card::FIELDS, ["rank", "suit"]);

    let (rank, suit) = c.clone().into_parts();
    assert_eq!((&*rank, &*suit), ("J", "clubs"));

    assert_eq!(c.with_rank("Q"), card("Q", "clubs"));
    assert_eq!(c.with_suit("hearts"), card("J", "hearts"));
    assert_eq!(Card::from(("J", "clubs")), c);
}

#[test]
fn equal_fields_mean_equal_cards() {
    let owned = Card::new(String::from("5"), String::from("hearts"));
    let borrowed = Card::from_static("5", "hearts");
    assert_eq!(owned, borrowed);
    assert!(card("10", "spades") < card("2", "clubs"));
    assert!(card("2", "clubs") < card("2", "spades"));
}

#[test]
fn styled_iteration_uses_the_attached_style() {
    let deck = Deck::new().with_style(CardStyle::Of);
    let first: Vec<String> = deck.styled_iter().take(2).map(|s| s.to_string()).collect();
    assert_eq!(first, ["2 of spades", "3 of spades"]);

    let last = deck.styled_iter().next_back().unwrap();
    assert_eq!(last.to_string(), "A of hearts");

    assert_eq!(deck.get(0).unwrap().to_string(), "Card(rank='2', suit='spades')");
    assert_eq!(
        Deck::new().styled_iter().next().unwrap().to_string(),
        "Card(rank='2', suit='spades')"
    );
}

#[test]
fn style_does_not_affect_equality() {
    assert_eq!(Deck::new(), Deck::new().with_style(CardStyle::Of));
}
