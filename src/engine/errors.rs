use crate::domain::{Chips, DomainError, PlayerId};

use thiserror::Error;

/// Ошибки движка раунда.
///
/// Отклонённое действие (`NotPlayersTurn`, `CannotCheck`, `RaiseExceedsStack`,
/// ...) раунд не меняет: игрок просто ходит заново.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Недостаточно игроков для начала раунда")]
    NotEnoughPlayers,

    #[error("Раунд уже идёт")]
    RoundAlreadyInProgress,

    #[error("Раунд не активен")]
    NoActiveRound,

    #[error("Текущий раунд ещё не завершён")]
    RoundStillInProgress,

    #[error("Игрок {0} не найден за столом")]
    PlayerNotFound(PlayerId),

    #[error("Сейчас не ход игрока с id={0}")]
    NotPlayersTurn(PlayerId),

    #[error("Невозможно выполнить check – нужно доставить {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("Для рейза нужно {needed} фишек, есть только {available}")]
    RaiseExceedsStack { needed: Chips, available: Chips },

    #[error("Ставка {amount} требует {needed} фишек, есть только {available}")]
    BetExceedsStack {
        amount: Chips,
        needed: Chips,
        available: Chips,
    },

    #[error("Сумма должна быть положительной")]
    InvalidAmount,

    #[error("Ставка {amount} меньше текущей ставки игрока {current}")]
    BetBelowCurrent { amount: Chips, current: Chips },

    #[error("Ставка {amount} меньше максимума стола {table_max}")]
    BetBelowTableMax { amount: Chips, table_max: Chips },

    #[error("Политика победителей вернула недопустимый набор")]
    InvalidWinnerSet,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
