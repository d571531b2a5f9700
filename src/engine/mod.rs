//! Движок раунда: раздача, очередь ставок, смена фаз, вскрытие.
//!
//! Состояние раунда живёт в `RoundEngine`, управляет им `TableSession`.
//! Основные операции:
//!   - `start_round` – перемешать, раздать и передать ход первому
//!   - `apply_action` – применить действие текущего игрока
//!   - `reset_round` – очистить стол между раундами

pub mod actions;
pub mod betting;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod positions;
pub mod pot;
pub mod session;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use betting::BettingState;
pub use errors::EngineError;
pub use events::{RoundHistory, TableEvent, TableEventKind, TableObserver};
pub use game_loop::{apply_action, reset_round, start_round, RoundEngine, RoundStage, RoundStatus};
pub use pot::Pot;
pub use session::{GameProgress, TableSession};

/// Источник перемешивания для движка. Реализации в `infra::rng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
