//! RNG-тесты:
//! - детерминированность DeterministicRng
//! - разные seed дают разные колоды
//! - shuffle — перестановка (без дублей и потерь)
//! - seed и счётчик перемешиваний

use std::collections::HashSet;

use card_table::domain::card::Card;
use card_table::domain::deck::Deck;
use card_table::engine::RandomSource;
use card_table::infra::{DeterministicRng, SystemRng};

//
// TEST 1 — same seed, same shuffle
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds, different decks
//
#[test]
fn deterministic_rng_different_seeds_differ() {
    let mut d1 = Deck::standard_52();
    let mut d2 = Deck::standard_52();

    d1.shuffle(&mut DeterministicRng::from_seed(1));
    d2.shuffle(&mut DeterministicRng::from_seed(2));

    assert_ne!(d1.cards, d2.cards);
}

//
// TEST 3 — shuffled deck is a permutation
//
#[test]
fn shuffled_deck_is_a_permutation() {
    let mut rng = DeterministicRng::from_seed(99);
    let mut deck = Deck::standard_52();

    for _ in 0..20 {
        deck.shuffle(&mut rng);
        assert_eq!(deck.len(), 52);
        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
        for card in deck.initial_cards() {
            assert!(unique.contains(card));
        }
    }
}

//
// TEST 4 — SystemRng keeps every element
//
#[test]
fn system_rng_shuffle_keeps_elements() {
    let mut rng = SystemRng;
    let mut v: Vec<u32> = (0..100).collect();
    rng.shuffle(&mut v);

    let mut sorted = v.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..100).collect::<Vec<_>>());
}

//
// TEST 5 — seeded sessions replay the same round
//
#[test]
fn same_seed_deals_same_hands() {
    let deal = |seed: u64| {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut DeterministicRng::from_seed(seed));
        (0..9).map(|_| deck.draw_one().unwrap()).collect::<Vec<Card>>()
    };
    assert_eq!(deal(2024), deal(2024));
}

//
// TEST 6 — seed and shuffle count are visible
//
#[test]
fn deterministic_rng_reports_seed_and_shuffles() {
    let mut rng = DeterministicRng::from_seed(42);
    assert_eq!(rng.seed(), 42);
    assert_eq!(rng.shuffles(), 0);

    let mut deck = Deck::standard_52();
    deck.shuffle(&mut rng);
    deck.shuffle(&mut rng);
    assert_eq!(rng.shuffles(), 2);
    assert_eq!(rng.seed(), 42);

    // Клон продолжает с того же состояния.
    let mut copy = rng.clone();
    let mut a: Vec<u32> = (0..30).collect();
    let mut b = a.clone();
    rng.shuffle(&mut a);
    copy.shuffle(&mut b);
    assert_eq!(a, b);
}
