use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::actions::PlayerActionKind;

/// Видимое изменение за столом.
///
/// Их потребляет слой отображения (раскладка карт, подсказки хода,
/// вскрытия); обратно в движок он ничего не сообщает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableEventKind {
    RoundStarted {
        round_number: u32,
    },

    /// Игрок получил закрытую карту.
    CardDealt {
        player_id: PlayerId,
        card: Card,
        face_down: bool,
        slot: usize,
    },

    /// Карта ушла в общие.
    CommunityCardDealt {
        card: Card,
        face_down: bool,
        slot: usize,
    },

    PhaseStarted {
        phase: u32,
    },

    /// Ход передан единственному игроку, который может действовать.
    TurnStarted {
        player_id: PlayerId,
        to_call: Chips,
        chip_count: Chips,
        /// `false`, если колл и так забирает весь стек.
        can_raise: bool,
    },

    PlayerActed {
        player_id: PlayerId,
        action: PlayerActionKind,
        chips_paid: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    BetPhaseClosed {
        phase: u32,
    },

    CardsRevealed {
        player_id: PlayerId,
    },

    CardsHidden {
        player_id: PlayerId,
    },

    HandCleared {
        player_id: PlayerId,
    },

    PotAwarded {
        player_id: PlayerId,
        amount: Chips,
    },

    RoundEnded {
        round_number: u32,
        winners: Vec<PlayerId>,
    },

    PlayerEliminated {
        player_id: PlayerId,
    },

    CommonPoolCleared,

    GameOver {
        champion: PlayerId,
    },
}

/// Событие с порядковым номером внутри раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableEvent {
    pub index: u32,
    pub kind: TableEventKind,
}

/// Все события одного раунда в порядке появления.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<TableEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: TableEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(TableEvent { index: idx, kind });
    }

    /// События начиная с позиции `from`.
    pub fn since(&self, from: usize) -> &[TableEvent] {
        self.events.get(from..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Получатель событий стола, например рендерер или UI.
pub trait TableObserver {
    fn on_event(&mut self, event: &TableEvent);
}

impl<F> TableObserver for F
where
    F: FnMut(&TableEvent),
{
    fn on_event(&mut self, event: &TableEvent) {
        self(event)
    }
}
