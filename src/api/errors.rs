use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки, которые видит фронтенд.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Некорректный ввод (например, битый JSON).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    #[error("Игрок {0} не сидит за этим столом")]
    PlayerNotAtTable(PlayerId),

    /// Команда допустима, но не сейчас (не ваш ход, нет раунда, ...).
    #[error("Недопустимая команда: {0}")]
    InvalidCommand(String),

    /// Отклонено само действие (суммы, чек).
    #[error("Действие отклонено: {0}")]
    RejectedAction(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err {
            EngineError::PlayerNotFound(id) => ApiError::PlayerNotAtTable(id),
            EngineError::NotEnoughPlayers
            | EngineError::RoundAlreadyInProgress
            | EngineError::NoActiveRound
            | EngineError::RoundStillInProgress
            | EngineError::NotPlayersTurn(_) => ApiError::InvalidCommand(msg),
            EngineError::CannotCheck { .. }
            | EngineError::RaiseExceedsStack { .. }
            | EngineError::BetExceedsStack { .. }
            | EngineError::InvalidAmount
            | EngineError::BetBelowCurrent { .. }
            | EngineError::BetBelowTableMax { .. } => ApiError::RejectedAction(msg),
            EngineError::Domain(_) | EngineError::InvalidWinnerSet | EngineError::Internal(_) => {
                ApiError::Internal(msg)
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
