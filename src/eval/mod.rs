//! Подключаемая оценка рук и выбор победителей.
//!
//! Для движка сила руки — непрозрачная упорядочиваемая оценка. Конкретные
//! правила зависят от варианта игры и передаются снаружи:
//!   - `HandScoring` превращает руку и общие карты в `HandValue`;
//!   - `WinnerPolicy` выбирает победителей на вскрытии.

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Оценка руки в рамках варианта. Значим только порядок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(pub i64);

/// Функция оценки варианта.
pub trait HandScoring {
    fn score(&self, hand: &Hand, community: &[Card]) -> HandValue;
}

impl<F> HandScoring for F
where
    F: Fn(&Hand, &[Card]) -> HandValue,
{
    fn score(&self, hand: &Hand, community: &[Card]) -> HandValue {
        self(hand, community)
    }
}

/// Разбор вскрытия.
///
/// Получает всех, кто ещё борется за банк (минимум двое), и возвращает
/// непустое подмножество их id. Ничья — это несколько победителей.
pub trait WinnerPolicy {
    fn winners(&self, contenders: &[&Player], community: &[Card]) -> Vec<PlayerId>;
}

/// Побеждают все претенденты с лучшей оценкой по `S`.
#[derive(Clone, Debug, Default)]
pub struct BestScoreWins<S> {
    pub scoring: S,
}

impl<S: HandScoring> BestScoreWins<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }
}

impl<S: HandScoring> WinnerPolicy for BestScoreWins<S> {
    fn winners(&self, contenders: &[&Player], community: &[Card]) -> Vec<PlayerId> {
        let scored: Vec<(PlayerId, HandValue)> = contenders
            .iter()
            .map(|p| (p.id, p.hand().value(&self.scoring, community)))
            .collect();

        let best = match scored.iter().map(|(_, v)| *v).max() {
            Some(best) => best,
            None => return Vec::new(),
        };

        scored
            .into_iter()
            .filter(|(_, v)| *v == best)
            .map(|(id, _)| id)
            .collect()
    }
}
