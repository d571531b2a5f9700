use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::common_pool::CommonPool;
use crate::domain::deck::standard_cards;
use crate::domain::errors::DomainError;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Одно место в конфигурации стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    /// Переопределяет `TableConfig::starting_stack` для этого места.
    #[serde(default)]
    pub stack: Option<Chips>,
}

impl SeatConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stack: None,
        }
    }

    pub fn with_stack(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack: Some(stack),
        }
    }
}

/// Статическая конфигурация: константы варианта, места и набор карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Закрытые карты каждому активному игроку в начале раунда.
    pub player_cards: usize,
    /// Максимум общих карт.
    pub community_capacity: usize,
    /// В начале фазы `k + 1` открывается `phase_community_cards[k]` карт.
    /// Фаза 0 — стартовая торговля, фаза после последней записи — вскрытие.
    pub phase_community_cards: Vec<usize>,
    pub starting_stack: Chips,
    pub max_players: usize,
    /// Места в исходном порядке хода; id игроков по нему: 1, 2, ...
    pub seats: Vec<SeatConfig>,
    /// Из этих карт колода пересобирается каждый раунд.
    pub initial_cards: Vec<Card>,
}

impl TableConfig {
    pub const DEFAULT_STACK: Chips = Chips(600);
    pub const DEFAULT_MAX_PLAYERS: usize = 7;

    /// Покерная раскладка: 2 закрытые карты, общие 3-1-1, 52 карты.
    pub fn poker<I, S>(names: I, starting_stack: Chips) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_cards: 2,
            community_capacity: 5,
            phase_community_cards: vec![3, 1, 1],
            starting_stack,
            max_players: Self::DEFAULT_MAX_PLAYERS,
            seats: names.into_iter().map(SeatConfig::named).collect(),
            initial_cards: standard_cards(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Сколько общих карт открыть в начале `phase`; `None` после последней
    /// фазы.
    pub fn community_cards_for_phase(&self, phase: u32) -> Option<usize> {
        if phase == 0 {
            return Some(0);
        }
        self.phase_community_cards.get(phase as usize - 1).copied()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |msg: String| Err(DomainError::InvalidConfig(msg));

        if self.seats.len() < 2 {
            return invalid(format!("need at least 2 seats, got {}", self.seats.len()));
        }
        if self.seats.len() > self.max_players {
            return invalid(format!(
                "{} seats exceed the maximum of {}",
                self.seats.len(),
                self.max_players
            ));
        }
        if self.player_cards == 0 {
            return invalid("player_cards must be positive".into());
        }
        for seat in &self.seats {
            if self.stack_for(seat).is_zero() {
                return invalid(format!("seat {:?} starts without chips", seat.name));
            }
        }

        let community_total: usize = self.phase_community_cards.iter().sum();
        if community_total > self.community_capacity {
            return invalid(format!(
                "phases deal {community_total} community cards, capacity is {}",
                self.community_capacity
            ));
        }

        let needed = self.seats.len() * self.player_cards + community_total;
        if self.initial_cards.len() < needed {
            return invalid(format!(
                "deck of {} cards cannot cover {needed} dealt cards",
                self.initial_cards.len()
            ));
        }

        let mut seen = HashSet::with_capacity(self.initial_cards.len());
        for card in &self.initial_cards {
            if !seen.insert(*card) {
                return invalid(format!("card {card} appears twice in initial_cards"));
            }
        }

        Ok(())
    }

    pub fn stack_for(&self, seat: &SeatConfig) -> Chips {
        seat.stack.unwrap_or(self.starting_stack)
    }
}

/// Состояние рассадки, живущее дольше одного раунда.
///
/// Раундовая часть (колода, банк, активные игроки, фаза) живёт в
/// `engine::RoundEngine`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub config: TableConfig,
    /// Все когда-либо севшие игроки, индекс `id - 1`.
    pub players: Vec<Player>,
    /// Очередь хода оставшихся игроков. Голова ходит первой в фазе 0 и
    /// после каждого раунда уходит в хвост.
    pub player_order: Vec<PlayerId>,
    pub common_pool: CommonPool,
    pub round_number: u32,
    pub round_in_progress: bool,
}

impl Table {
    pub fn new(config: TableConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let players: Vec<Player> = config
            .seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| {
                Player::new(
                    idx as PlayerId + 1,
                    seat.name.clone(),
                    config.stack_for(seat),
                    config.player_cards,
                )
            })
            .collect();
        let player_order = players.iter().map(|p| p.id).collect();
        let common_pool = CommonPool::new(config.community_capacity);

        Ok(Self {
            config,
            players,
            player_order,
            common_pool,
            round_number: 0,
            round_in_progress: false,
        })
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        let idx = (id as usize).checked_sub(1)?;
        self.players.get(idx)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let idx = (id as usize).checked_sub(1)?;
        self.players.get_mut(idx)
    }

    /// Последний оставшийся игрок, когда остальные выбыли.
    pub fn champion(&self) -> Option<PlayerId> {
        match self.player_order.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn remove_from_player_order(&mut self, id: PlayerId) {
        self.player_order.retain(|p| *p != id);
    }

    /// Сдвиг баттона: голова очереди уходит в хвост.
    pub fn rotate_player_order(&mut self) {
        if !self.player_order.is_empty() {
            self.player_order.rotate_left(1);
        }
    }
}
