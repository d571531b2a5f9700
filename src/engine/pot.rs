use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::round::Payout;
use crate::domain::PlayerId;

/// Фишки, поставленные в текущем раунде.
///
/// `contributions` хранит, кто сколько внёс: `total` всегда равен сумме
/// всех списаний со стеков за раунд.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
    pub contributions: BTreeMap<PlayerId, Chips>,
    /// Банк уже выплачен; сбрасывается вместе с раундом.
    pub awarded: bool,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, player_id: PlayerId, amount: Chips) {
        if amount.is_zero() {
            return;
        }
        self.total += amount;
        *self.contributions.entry(player_id).or_insert(Chips::ZERO) += amount;
    }

    pub fn contributed_by(&self, player_id: PlayerId) -> Chips {
        self.contributions
            .get(&player_id)
            .copied()
            .unwrap_or(Chips::ZERO)
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
        self.contributions.clear();
        self.awarded = false;
    }
}

/// Поделить `total` поровну между `winners`; остаток раздаётся по одной
/// фишке в порядке списка.
pub fn split_pot(total: Chips, winners: &[PlayerId]) -> Vec<Payout> {
    if winners.is_empty() {
        return Vec::new();
    }

    let count = winners.len() as u64;
    let share = total.0 / count;
    let mut remainder = total.0 % count;

    winners
        .iter()
        .map(|&player_id| {
            let mut amount = share;
            if remainder > 0 {
                amount += 1;
                remainder -= 1;
            }
            Payout {
                player_id,
                amount: Chips(amount),
            }
        })
        .collect()
}
