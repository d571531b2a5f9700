use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Фишки, выплаченные одному игроку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub player_id: PlayerId,
    pub amount: Chips,
}

/// Итог завершённого раунда для истории и клиентов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_number: u32,
    /// Последняя достигнутая фаза.
    pub phase_reached: u32,
    pub community: Vec<Card>,
    pub total_pot: Chips,
    pub winners: Vec<PlayerId>,
    pub payouts: Vec<Payout>,
    /// `false`, если остальные сбросили и руки не сравнивались.
    pub showdown: bool,
}
