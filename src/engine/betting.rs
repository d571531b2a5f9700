use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::{Bettable, Player};
use crate::domain::PlayerId;

/// Состояние торговли в текущей фазе.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// 0 — стартовая фаза, растёт с каждым открытием общих карт.
    pub phase: u32,
    /// Максимальная ставка среди активных игроков в этой фазе.
    pub current_max_bet: Chips,
    /// Единственный игрок, который может ходить.
    pub current_actor: Option<PlayerId>,
}

impl BettingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сколько `player` должен доставить до максимума стола.
    pub fn to_call(&self, player: &Player) -> Chips {
        player.current_bet().diff_to(self.current_max_bet)
    }
}

/// Фаза торговли закончена, когда каждый активный игрок либо олл-ин,
/// либо уже сходил и уравнял максимум стола.
pub fn is_betting_complete<'a, I>(active: I, current_max_bet: Chips) -> bool
where
    I: IntoIterator<Item = &'a Player>,
{
    active
        .into_iter()
        .all(|p| p.is_all_in || (p.has_played && p.current_bet() == current_max_bet))
}
