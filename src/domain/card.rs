use core::cmp::Ordering;
use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];
}

/// Непрозрачная ссылка на картинку карты. Ядро её не разбирает.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FaceId(pub u32);

/// Игральная карта. После сборки из конфигурации не меняется.
///
/// `min_value` / `max_value` — границы достоинства (туз в стандартной
/// колоде 1..14). Карты сравниваются через [`Card::cmp_rank`], он смотрит
/// только на `max_value`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub min_value: u8,
    pub max_value: u8,
    pub face: FaceId,
}

impl Card {
    pub const fn new(suit: Suit, min_value: u8, max_value: u8, face: FaceId) -> Self {
        Self {
            suit,
            min_value,
            max_value,
            face,
        }
    }

    /// Стандартная карта достоинства 2..=14. У туза нижняя граница 1.
    pub const fn standard(max_value: u8, suit: Suit) -> Self {
        let min_value = if max_value == 14 { 1 } else { max_value };
        let suit_idx = match suit {
            Suit::Heart => 0,
            Suit::Diamond => 1,
            Suit::Club => 2,
            Suit::Spade => 3,
        };
        let face = FaceId(suit_idx * 13 + (max_value as u32 - 2));
        Self::new(suit, min_value, max_value, face)
    }

    /// Ключ сравнения для сортировки руки.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.max_value.cmp(&other.max_value)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
            Suit::Spade => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// `Ah`, `Td`, `7c`. Нестандартные достоинства печатаются как `[n]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_value {
            2..=9 => write!(f, "{}{}", self.max_value, self.suit),
            10 => write!(f, "T{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            14 => write!(f, "A{}", self.suit),
            v => write!(f, "[{v}]{}", self.suit),
        }
    }
}

/// Разбор "Ah", "Td", "7c" в стандартную карту.
impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(DomainError::InvalidCard(format!("expected 2 chars, got {s:?}"))),
        };

        let value = match r_ch {
            '2'..='9' => r_ch as u8 - b'0',
            'T' | 't' => 10,
            'J' | 'j' => 11,
            'Q' | 'q' => 12,
            'K' | 'k' => 13,
            'A' | 'a' => 14,
            _ => return Err(DomainError::InvalidCard(format!("invalid rank: {r_ch}"))),
        };

        let suit = match s_ch {
            'h' | 'H' => Suit::Heart,
            'd' | 'D' => Suit::Diamond,
            'c' | 'C' => Suit::Club,
            's' | 'S' => Suit::Spade,
            _ => return Err(DomainError::InvalidCard(format!("invalid suit: {s_ch}"))),
        };

        Ok(Card::standard(value, suit))
    }
}
