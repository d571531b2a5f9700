use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над u64, чтобы не путать с обычными числами.
///
/// Арифметика не обрезает значения: уход ниже нуля или переполнение —
/// нарушенный инвариант и паника.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn new(amount: u64) -> Self {
        Chips(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_sub(self, other: Chips) -> Option<Chips> {
        self.0.checked_sub(other.0).map(Chips)
    }

    /// Сколько не хватает `self` до `other` (ноль, если уже достаёт).
    pub fn diff_to(self, other: Chips) -> Chips {
        Chips(other.0.saturating_sub(self.0))
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        match self.0.checked_add(rhs.0) {
            Some(v) => Chips(v),
            None => panic!("chip overflow: {} + {}", self.0, rhs.0),
        }
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        *self = *self + rhs;
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Chips(v),
            None => panic!("chip underflow: {} - {}", self.0, rhs.0),
        }
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        *self = *self - rhs;
    }
}

impl core::iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

/// Фишки одного игрока. Отрицательными не бывают.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipBalance {
    amount: Chips,
}

impl ChipBalance {
    pub fn new(amount: Chips) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn deposit(&mut self, chips: Chips) {
        self.amount += chips;
    }

    /// Списать ровно `chips`.
    ///
    /// # Panics
    /// Если баланса не хватает. Вызывающий проверяет заранее.
    pub fn withdraw(&mut self, chips: Chips) {
        assert!(
            chips <= self.amount,
            "withdrawing {} from a balance of {}",
            chips,
            self.amount
        );
        self.amount -= chips;
    }
}
