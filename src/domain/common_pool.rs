use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::DomainError;

/// Открытые общие карты стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommonPool {
    capacity: usize,
    cards: Vec<Card>,
}

impl CommonPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Добавить карту; возвращает индекс слота.
    pub fn push(&mut self, card: Card) -> Result<usize, DomainError> {
        if self.is_full() {
            return Err(DomainError::CommonPoolFull {
                capacity: self.capacity,
            });
        }
        self.cards.push(card);
        Ok(self.cards.len() - 1)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
