use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::errors::DomainError;
use crate::engine::RandomSource;

/// Колода; карты берутся сверху (с конца `cards`).
///
/// `initial` — заданный набор карт. Каждое перемешивание пересобирает
/// `cards` из него, поэтому дублей в колоде не бывает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    initial: Vec<Card>,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Колода из заданного набора, в порядке конфигурации.
    pub fn from_initial(initial: Vec<Card>) -> Self {
        let cards = initial.clone();
        Self { initial, cards }
    }

    /// Стандартная колода 52 карты: Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        Self::from_initial(standard_cards())
    }

    pub fn initial_cards(&self) -> &[Card] {
        &self.initial
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Пересобрать из исходного набора и перемешать.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        self.cards.clear();
        self.cards.extend_from_slice(&self.initial);
        rng.shuffle(&mut self.cards);
    }

    /// Взять верхнюю карту.
    pub fn draw_one(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }
}

/// 52 стандартные карты в порядке конфигурации.
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for value in 2..=14 {
            cards.push(Card::standard(value, suit));
        }
    }
    cards
}
