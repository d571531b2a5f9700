use tracing::info;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Bettable;
use crate::domain::table::{Table, TableConfig};
use crate::domain::PlayerId;
use crate::engine::events::{TableEventKind, TableObserver};
use crate::engine::game_loop::{self, RoundEngine, RoundStatus};
use crate::engine::{EngineError, PlayerAction, RandomSource};
use crate::eval::WinnerPolicy;

/// Чем закончился `next_round`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameProgress {
    /// Роздан новый раунд.
    Round(RoundStatus),
    /// Все фишки у одного игрока.
    GameOver { champion: PlayerId },
}

/// Стол и его текущий раунд.
///
/// Обёртка над `game_loop::{start_round, apply_action, reset_round}`:
/// держит политику победителей и RNG, каждое новое событие раунда
/// рассылает подписчикам.
pub struct TableSession<R: RandomSource> {
    table: Table,
    round: Option<RoundEngine>,
    policy: Box<dyn WinnerPolicy>,
    rng: R,
    observers: Vec<Box<dyn TableObserver>>,
    /// Сколько событий текущего раунда уже разослано.
    delivered: usize,
    champion: Option<PlayerId>,
}

impl<R: RandomSource> TableSession<R> {
    pub fn new(
        config: TableConfig,
        policy: Box<dyn WinnerPolicy>,
        rng: R,
    ) -> Result<Self, EngineError> {
        let table = Table::new(config)?;
        info!(
            players = table.players.len(),
            stack = %table.config.starting_stack,
            "стол создан"
        );
        Ok(Self {
            table,
            round: None,
            policy,
            rng,
            observers: Vec::new(),
            delivered: 0,
            champion: None,
        })
    }

    pub fn subscribe(&mut self, observer: Box<dyn TableObserver>) {
        self.observers.push(observer);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Текущий или последний завершённый раунд.
    pub fn round(&self) -> Option<&RoundEngine> {
        self.round.as_ref()
    }

    pub fn champion(&self) -> Option<PlayerId> {
        self.champion
    }

    /// Раздать новый раунд. Ошибка, если предыдущий не сброшен.
    pub fn start_round(&mut self) -> Result<RoundStatus, EngineError> {
        let engine =
            game_loop::start_round(&mut self.table, &mut self.rng, self.policy.as_ref())?;
        self.round = Some(engine);
        self.delivered = 0;
        self.flush_events();
        self.status()
    }

    pub fn act(&mut self, action: PlayerAction) -> Result<RoundStatus, EngineError> {
        let engine = self.round.as_mut().ok_or(EngineError::NoActiveRound)?;
        let status = game_loop::apply_action(&mut self.table, engine, action, self.policy.as_ref());
        self.flush_events();
        status
    }

    /// Сбросить завершённый раунд, затем объявить чемпиона или раздать
    /// следующий.
    pub fn next_round(&mut self) -> Result<GameProgress, EngineError> {
        let engine = self.round.as_mut().ok_or(EngineError::NoActiveRound)?;
        game_loop::reset_round(&mut self.table, engine)?;

        if let Some(champion) = self.table.champion() {
            engine.history.push(TableEventKind::GameOver { champion });
            self.flush_events();
            self.champion = Some(champion);
            info!(champion, rounds = self.table.round_number, "игра окончена");
            return Ok(GameProgress::GameOver { champion });
        }

        self.flush_events();
        self.start_round().map(GameProgress::Round)
    }

    /// Показать текущему игроку его карты.
    pub fn peek_cards(&mut self, player_id: PlayerId) -> Result<Vec<Card>, EngineError> {
        self.ensure_current_actor(player_id)?;
        let cards = self
            .table
            .player(player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?
            .hand()
            .cards()
            .to_vec();
        self.push_event(TableEventKind::CardsRevealed { player_id })?;
        Ok(cards)
    }

    pub fn hide_cards(&mut self, player_id: PlayerId) -> Result<(), EngineError> {
        self.ensure_current_actor(player_id)?;
        self.push_event(TableEventKind::CardsHidden { player_id })
    }

    pub fn current_actor(&self) -> Option<PlayerId> {
        self.round.as_ref().and_then(|r| r.current_actor())
    }

    pub fn pot_total(&self) -> Chips {
        self.round.as_ref().map_or(Chips::ZERO, |r| r.pot.total)
    }

    pub fn current_max_bet(&self) -> Chips {
        self.round
            .as_ref()
            .map_or(Chips::ZERO, |r| r.betting.current_max_bet)
    }

    pub fn chip_count(&self, player_id: PlayerId) -> Option<Chips> {
        self.table.player(player_id).map(|p| p.chip_count())
    }

    /// Сколько `player_id` ещё должен доставить в этой фазе.
    pub fn to_call(&self, player_id: PlayerId) -> Option<Chips> {
        let round = self.round.as_ref()?;
        let player = self.table.player(player_id)?;
        Some(round.betting.to_call(player))
    }

    fn status(&self) -> Result<RoundStatus, EngineError> {
        self.round
            .as_ref()
            .ok_or(EngineError::NoActiveRound)?
            .status()
    }

    fn ensure_current_actor(&self, player_id: PlayerId) -> Result<(), EngineError> {
        if self.table.player(player_id).is_none() {
            return Err(EngineError::PlayerNotFound(player_id));
        }
        match self.current_actor() {
            Some(actor) if actor == player_id => Ok(()),
            Some(_) => Err(EngineError::NotPlayersTurn(player_id)),
            None => Err(EngineError::NoActiveRound),
        }
    }

    fn push_event(&mut self, kind: TableEventKind) -> Result<(), EngineError> {
        let engine = self.round.as_mut().ok_or(EngineError::NoActiveRound)?;
        engine.history.push(kind);
        self.flush_events();
        Ok(())
    }

    fn flush_events(&mut self) {
        let Some(engine) = self.round.as_ref() else {
            return;
        };
        for event in engine.history.since(self.delivered) {
            for observer in self.observers.iter_mut() {
                observer.on_event(event);
            }
        }
        self.delivered = engine.history.len();
    }
}
