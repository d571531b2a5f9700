use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::PlayerStatus;
use crate::domain::round::{Payout, RoundSummary};
use crate::domain::PlayerId;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub name: String,
    pub chip_count: Chips,
    pub current_bet: Chips,
    pub status: PlayerStatus,
    /// Закрытые карты: свои для героя, после вскрытия — всех.
    pub hand: Option<Vec<Card>>,
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub round_number: u32,
    pub round_in_progress: bool,
    pub phase: u32,
    pub pot_total: Chips,
    pub current_max_bet: Chips,
    pub community: Vec<Card>,
    pub players: Vec<PlayerViewDto>,
    pub current_actor: Option<PlayerId>,
    /// Сколько текущему игроку нужно доставить, чтобы остаться.
    pub to_call: Option<Chips>,
}

/// DTO завершённого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummaryDto {
    pub round_number: u32,
    pub phase_reached: u32,
    pub community: Vec<Card>,
    pub total_pot: Chips,
    pub winners: Vec<PlayerId>,
    pub payouts: Vec<Payout>,
    pub showdown: bool,
}

impl From<RoundSummary> for RoundSummaryDto {
    fn from(summary: RoundSummary) -> Self {
        Self {
            round_number: summary.round_number,
            phase_reached: summary.phase_reached,
            community: summary.community,
            total_pot: summary.total_pot,
            winners: summary.winners,
            payouts: summary.payouts,
            showdown: summary.showdown,
        }
    }
}
