use thiserror::Error;

use crate::domain::PlayerId;

/// Ошибки доменных контейнеров и конфигурации.
///
/// Все они про конфигурацию: прерывают подготовку раунда, повторять их
/// посреди раунда бессмысленно.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Колода пуста")]
    EmptyDeck,

    #[error("Рука игрока {owner} заполнена ({limit} карт)")]
    HandFull { owner: PlayerId, limit: usize },

    #[error("Общие карты заполнены ({capacity} карт)")]
    CommonPoolFull { capacity: usize },

    #[error("Некорректная карта: {0}")]
    InvalidCard(String),

    #[error("Некорректная конфигурация стола: {0}")]
    InvalidConfig(String),

    #[error("Не удалось разобрать конфигурацию стола: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
