use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;
use crate::engine::actions::PlayerAction;
use crate::engine::{GameProgress, RandomSource, RoundStatus, TableSession};

use super::dto::RoundSummaryDto;
use super::errors::ApiError;

/// Команда фронтенда к столу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Раздать первый раунд (или следующий после ручного сброса).
    StartRound,

    /// Действие игрока, чей сейчас ход.
    Act(PlayerAction),

    /// Закрыть завершённый раунд и раздать следующий.
    NextRound,

    /// Текущий игрок смотрит свои карты.
    PeekCards { player_id: PlayerId },

    /// Текущий игрок снова закрывает карты.
    HideCards { player_id: PlayerId },
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Сообщать нечего.
    Ok,

    /// Раунд ждёт этого игрока.
    AwaitingAction { player_id: PlayerId },

    RoundFinished(RoundSummaryDto),

    GameOver { champion: PlayerId },

    /// Карты, открытые владельцу.
    Cards(Vec<Card>),
}

impl From<RoundStatus> for CommandResponse {
    fn from(status: RoundStatus) -> Self {
        match status {
            RoundStatus::AwaitingAction(player_id) => CommandResponse::AwaitingAction { player_id },
            RoundStatus::Finished(summary) => CommandResponse::RoundFinished(summary.into()),
        }
    }
}

/// Выполнить команду над сессией.
pub fn execute<R: RandomSource>(
    session: &mut TableSession<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let response: CommandResponse = match command {
        Command::StartRound => session.start_round()?.into(),
        Command::Act(action) => session.act(action)?.into(),
        Command::NextRound => match session.next_round()? {
            GameProgress::Round(status) => status.into(),
            GameProgress::GameOver { champion } => CommandResponse::GameOver { champion },
        },
        Command::PeekCards { player_id } => CommandResponse::Cards(session.peek_cards(player_id)?),
        Command::HideCards { player_id } => {
            session.hide_cards(player_id)?;
            CommandResponse::Ok
        }
    };
    Ok(response)
}
