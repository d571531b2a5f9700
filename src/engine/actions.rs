use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    /// Пропуск без фишек; только если доставлять нечего.
    Check,
    /// Уравнять максимум стола или олл-ин, если фишек не хватает.
    Call,
    /// Довести общую ставку фазы до указанной суммы.
    Bet(Chips),
    /// Поднять максимум стола на указанную сумму.
    Raise(Chips),
    /// Поставить весь стек.
    AllIn,
}

/// Действие одного игрока за столом.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub player_id: PlayerId,
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(player_id: PlayerId, kind: PlayerActionKind) -> Self {
        Self { player_id, kind }
    }
}
