//! Prints a walkthrough of the deck's sequence behaviour.
//!
//! Run with `RUST_LOG=frenchdeck=trace` to see construction and write events.

use std::time::{SystemTime, UNIX_EPOCH};

use frenchdeck::order::{self, OrderKey};
use frenchdeck::{Card, CardSequence, CardStyle, Deck, RankMajor, Slice, SuitMajor};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let beer_card = Card::new("7", "diamonds");
    println!("{beer_card:?}");

    let deck = Deck::new();
    println!("len(deck) = {}", deck.len());
    show("deck[0]", deck.get(0));
    show("deck[-1]", deck.get(-1));
    show("deck[52]", deck.get(52));

    println!("random: {:?}", deck.choose(&mut rng));
    println!("random: {:?}", deck.choose(&mut rng));

    println!("deck[:3] = {:?}", deck.slice(Slice::range(0, 3)));
    println!(
        "deck[12::13] = {:?}",
        deck.slice(Slice::full().with_start(12).with_step(13))
    );

    for card in deck.iter().take(3) {
        println!("{card:?}");
    }
    for card in deck.iter().rev().take(3) {
        println!("{card:?}");
    }

    println!(
        "Card('Q', 'hearts') in deck: {}",
        deck.contains(&Card::new("Q", "hearts"))
    );
    println!(
        "Card('Charmander', 'Fire') in deck: {}",
        deck.contains(&Card::new("Charmander", "Fire"))
    );

    let default_sorted = order::sorted(&deck);
    println!("sorted(deck)[:5] = {:?}", &default_sorted[..5]);

    let spades_high = RankMajor::default();
    for card in order::sorted_by_key(&deck, &spades_high).iter().take(5) {
        println!("{:?} {card:?}", spades_high.key(card));
    }
    for card in order::sorted_by_key(&deck, &SuitMajor::default()).iter().take(5) {
        println!("{card:?}");
    }

    let mut deck = deck.with_style(CardStyle::Of);
    show_styled("deck[0]", &deck, 0);
    if let Err(err) = deck.set(0, Card::new("A", "spades")) {
        println!("deck[0] = Card('A', 'spades') -> {err}");
    }

    let mut writable = deck.into_mutable();
    match writable.set(0, Card::new("A", "spades")) {
        Ok(old) => println!("replaced {}", old.styled(writable.style())),
        Err(err) => println!("write error: {err}"),
    }
    show_styled("deck[0]", &writable, 0);
    println!("distinct cards: {}", writable.distinct_count());

    writable.shuffle(&mut rng);
    println!("shuffled[:5] = {:?}", writable.slice(Slice::range(0, 5)));
}

fn show(label: &str, result: Result<&Card, frenchdeck::DeckError>) {
    match result {
        Ok(card) => println!("{label} = {card:?}"),
        Err(err) => println!("{label} -> {err}"),
    }
}

fn show_styled<S: CardSequence>(label: &str, seq: &S, position: isize) {
    match seq.display(position) {
        Ok(styled) => println!("{label} = {styled}"),
        Err(err) => println!("{label} -> {err}"),
    }
}
