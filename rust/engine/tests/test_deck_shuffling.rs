use std::collections::HashSet;

use cardsaga_engine::cards::{full_deck, Card};
use cardsaga_engine::deck::Deck;
use cardsaga_engine::errors::GameError;
use cardsaga_engine::poker::{deal_hands, DealOrder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(
        deck.draw(),
        Err(GameError::EmptyDeck),
        "after 52 cards, deck should be empty"
    );
    let canonical: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(set, canonical);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a = d1.draw_n(10).unwrap();
    let b = d2.draw_n(10).unwrap();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a = d1.draw_n(10).unwrap();
    let b = d2.draw_n(10).unwrap();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_accepts_any_rng() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let deck = Deck::new_shuffled(&mut rng);
    assert_eq!(deck.remaining(), 52);
    assert_ne!(deck.peek_remaining(), full_deck().as_slice());
}

#[test]
fn poker_deal_leaves_42_cards() {
    let mut deck = Deck::new_with_seed(777);
    let (player, opponent) = deal_hands(&mut deck, DealOrder::Block).expect("fresh deck suffices");
    assert_eq!(player.len(), 5);
    assert_eq!(opponent.len(), 5);
    assert_eq!(deck.remaining(), 42);

    let mut set = HashSet::new();
    for c in player.cards().iter().chain(opponent.cards()) {
        assert!(set.insert(*c));
    }
}

#[test]
fn block_deal_gives_first_five_to_player() {
    let mut deck = Deck::new_with_seed(99);
    let top = deck.peek_remaining()[..10].to_vec();
    let (player, opponent) = deal_hands(&mut deck, DealOrder::Block).unwrap();
    assert_eq!(player.cards(), &top[..5]);
    assert_eq!(opponent.cards(), &top[5..]);
}

#[test]
fn five_poker_deals_exhaust_the_deck() {
    let mut deck = Deck::new_with_seed(3);
    for _ in 0..5 {
        deal_hands(&mut deck, DealOrder::Block).unwrap();
    }
    assert_eq!(deck.remaining(), 2);
    assert_eq!(
        deal_hands(&mut deck, DealOrder::Block),
        Err(GameError::EmptyDeck)
    );
    assert_eq!(deck.remaining(), 2, "a failed deal draws nothing");
}
