use crate::domain::chips::Chips;
use crate::domain::player::{Bettable, Player};
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::EngineError;

/// Итоговая ставка игрока после `action` или причина отказа.
///
/// Фолд сюда не попадает: он всегда допустим и фишек не двигает.
pub fn resolve_bet_target(
    player: &Player,
    action: &PlayerActionKind,
    table_max: Chips,
) -> Result<Chips, EngineError> {
    let current = player.current_bet();
    let stack = player.chip_count();

    match *action {
        PlayerActionKind::Fold => Err(EngineError::Internal("fold has no bet target")),

        PlayerActionKind::Check => {
            // Чек оставляет уже поставленное (на практике ноль).
            if current == table_max {
                Ok(current)
            } else {
                Err(EngineError::CannotCheck {
                    to_call: current.diff_to(table_max),
                })
            }
        }

        PlayerActionKind::Call => Ok(player.call_target(table_max)),

        PlayerActionKind::Raise(by) => {
            if by.is_zero() {
                return Err(EngineError::InvalidAmount);
            }
            player
                .raise_target(table_max, by)
                .ok_or_else(|| EngineError::RaiseExceedsStack {
                    needed: current.diff_to(table_max + by),
                    available: stack,
                })
        }

        PlayerActionKind::Bet(amount) => {
            if amount.is_zero() {
                return Err(EngineError::InvalidAmount);
            }
            if amount < current {
                return Err(EngineError::BetBelowCurrent { amount, current });
            }
            let needed = amount - current;
            if needed > stack {
                return Err(EngineError::BetExceedsStack {
                    amount,
                    needed,
                    available: stack,
                });
            }
            // Меньше максимума стола можно только олл-ином.
            if amount < table_max && needed != stack {
                return Err(EngineError::BetBelowTableMax { amount, table_max });
            }
            Ok(amount)
        }

        PlayerActionKind::AllIn => {
            if stack.is_zero() {
                return Err(EngineError::InvalidAmount);
            }
            Ok(player.all_in_target())
        }
    }
}
