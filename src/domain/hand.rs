use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::DomainError;
use crate::domain::PlayerId;
use crate::eval::{HandScoring, HandValue};

/// Закрытые карты одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    owner: PlayerId,
    limit: usize,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(owner: PlayerId, limit: usize) -> Self {
        Self {
            owner,
            limit,
            cards: Vec::with_capacity(limit),
        }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Добавить карту; возвращает индекс слота (нужен только отображению).
    pub fn add_card(&mut self, card: Card) -> Result<usize, DomainError> {
        if self.cards.len() >= self.limit {
            return Err(DomainError::HandFull {
                owner: self.owner,
                limit: self.limit,
            });
        }
        self.cards.push(card);
        Ok(self.cards.len() - 1)
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
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

    /// Устойчивая сортировка по достоинству.
    pub fn sort(&mut self) {
        self.cards.sort_by(|a, b| a.cmp_rank(b));
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Непрозрачная оценка руки по правилам варианта.
    pub fn value<S: HandScoring + ?Sized>(&self, scoring: &S, community: &[Card]) -> HandValue {
        scoring.score(self, community)
    }
}
