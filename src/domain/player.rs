use serde::{Deserialize, Serialize};

use crate::domain::chips::{ChipBalance, Chips};
use crate::domain::hand::Hand;
use crate::domain::PlayerId;

/// Возможность делать ставки.
///
/// Реализация меняет только свой стек и флаги раунда; перенос фишек в банк
/// и передача хода — забота стола.
pub trait Bettable {
    fn chip_count(&self) -> Chips;

    fn current_bet(&self) -> Chips;

    /// Довести ставку фазы до `amount`, доплатив разницу из стека.
    /// Возвращает доплату. `amount == 0` — чек, ничего не платится.
    ///
    /// Без проверок: `amount` не ниже текущей ставки, разница покрывается
    /// стеком.
    fn commit_bet(&mut self, amount: Chips) -> Chips;

    /// Итоговая ставка для рейза максимума стола на `by`
    /// или `None`, если стек её не покрывает.
    fn raise_target(&self, table_max: Chips, by: Chips) -> Option<Chips> {
        let target = table_max + by;
        let needed = target.checked_sub(self.current_bet()).unwrap_or(Chips::ZERO);
        if needed > self.chip_count() {
            None
        } else {
            Some(target)
        }
    }

    /// Итоговая ставка колла: максимум стола или весь стек, если его мало.
    fn call_target(&self, table_max: Chips) -> Chips {
        let reachable = self.chip_count() + self.current_bet();
        if table_max > reachable {
            reachable
        } else {
            table_max
        }
    }

    /// Итоговая ставка при олл-ине.
    fn all_in_target(&self) -> Chips {
        self.chip_count() + self.current_bet()
    }
}

/// Возможность выйти из текущего раунда.
pub trait Foldable {
    fn fold(&mut self);
}

/// Статус игрока для клиентов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// В раунде, в этой фазе ещё не ходил.
    Waiting,
    /// В раунде, в этой фазе уже сходил.
    Acted,
    /// Поставил весь стек.
    AllIn,
    /// Вышел из текущего раунда.
    Folded,
    /// Выбыл из игры (ноль фишек на границе раундов).
    Eliminated,
}

/// Игрок за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Постоянный id с 1, он же ключ места.
    pub id: PlayerId,
    pub name: String,
    hand: Hand,
    balance: ChipBalance,
    current_bet: Chips,
    pub has_played: bool,
    pub is_all_in: bool,
    pub has_lost: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, stack: Chips, hand_limit: usize) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(id, hand_limit),
            balance: ChipBalance::new(stack),
            current_bet: Chips::ZERO,
            has_played: false,
            is_all_in: false,
            has_lost: false,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Флаги, сбрасываемые в начале каждого раунда.
    pub fn reset_for_round(&mut self) {
        self.has_played = false;
        self.current_bet = Chips::ZERO;
        self.is_all_in = false;
    }

    /// Флаги, сбрасываемые в начале каждой фазы.
    pub fn reset_for_phase(&mut self) {
        self.current_bet = Chips::ZERO;
        self.has_played = false;
    }

    /// Выигрыш, выплаченный столом.
    pub fn receive(&mut self, chips: Chips) {
        self.balance.deposit(chips);
    }

    /// Проверка выбывания на границе раундов. `true`, если игрок только
    /// что помечен выбывшим.
    pub fn verify_lose_condition(&mut self) -> bool {
        if self.has_lost || !self.balance.is_empty() {
            return false;
        }
        self.has_lost = true;
        true
    }

    pub fn status(&self, in_round: bool) -> PlayerStatus {
        if self.has_lost {
            PlayerStatus::Eliminated
        } else if !in_round {
            PlayerStatus::Folded
        } else if self.is_all_in {
            PlayerStatus::AllIn
        } else if self.has_played {
            PlayerStatus::Acted
        } else {
            PlayerStatus::Waiting
        }
    }
}

impl Bettable for Player {
    fn chip_count(&self) -> Chips {
        self.balance.amount()
    }

    fn current_bet(&self) -> Chips {
        self.current_bet
    }

    fn commit_bet(&mut self, amount: Chips) -> Chips {
        let chips_to_pay = if amount.is_zero() {
            Chips::ZERO
        } else {
            amount - self.current_bet
        };
        self.current_bet = amount;
        self.balance.withdraw(chips_to_pay);
        self.has_played = true;
        if self.balance.is_empty() {
            self.is_all_in = true;
        }
        chips_to_pay
    }
}

impl Foldable for Player {
    fn fold(&mut self) {
        self.has_played = true;
        self.hand.clear();
    }
}
