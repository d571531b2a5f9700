// tests/engine_actions_tests.rs

//! Тесты action-логики движка:
//! - Check только при уравненной ставке
//! - Raise / Bet / Call переносят в банк ровно нужные фишки
//! - короткий колл превращается в олл-ин
//! - ход вне очереди и кривые суммы отклоняются без побочных эффектов
//! - Fold убирает игрока из раунда

use card_table::domain::{
    card::Card,
    chips::Chips,
    player::{Bettable, Player},
    table::{SeatConfig, Table, TableConfig},
    PlayerId,
};
use card_table::engine::{
    apply_action, start_round, EngineError, PlayerAction, PlayerActionKind, RandomSource,
    RoundEngine, RoundStatus, TableEventKind,
};
use card_table::eval::WinnerPolicy;

struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

/// Всегда побеждает первый претендент.
struct FirstWins;

impl WinnerPolicy for FirstWins {
    fn winners(&self, contenders: &[&Player], _community: &[Card]) -> Vec<PlayerId> {
        vec![contenders[0].id]
    }
}

/// Хелпер: покерный стол, одно место на каждый стек.
fn make_table(stacks: &[u64]) -> Table {
    let mut config = TableConfig::poker(["seed"], TableConfig::DEFAULT_STACK);
    config.seats = stacks
        .iter()
        .enumerate()
        .map(|(i, s)| SeatConfig::with_stack(format!("P{}", i + 1), Chips(*s)))
        .collect();
    Table::new(config).expect("valid table")
}

fn start(stacks: &[u64]) -> (Table, RoundEngine) {
    let mut table = make_table(stacks);
    let engine = start_round(&mut table, &mut DummyRng, &FirstWins).expect("round starts");
    (table, engine)
}

fn act(
    table: &mut Table,
    engine: &mut RoundEngine,
    player_id: PlayerId,
    kind: PlayerActionKind,
) -> Result<RoundStatus, EngineError> {
    apply_action(table, engine, PlayerAction::new(player_id, kind), &FirstWins)
}

fn chips(table: &Table, id: PlayerId) -> Chips {
    table.player(id).unwrap().chip_count()
}

//
// START
//

#[test]
fn round_starts_with_head_of_order() {
    let (table, engine) = start(&[600, 600, 600]);

    assert_eq!(engine.status().unwrap(), RoundStatus::AwaitingAction(1));
    assert_eq!(engine.active_players, vec![1, 2, 3]);
    assert_eq!(engine.phase(), 0);
    assert!(table.round_in_progress);
    for p in &table.players {
        assert_eq!(p.hand().len(), 2);
    }
    assert_eq!(engine.deck.len(), 52 - 6);
}

#[test]
fn second_start_is_rejected() {
    let (mut table, _engine) = start(&[600, 600]);
    let err = start_round(&mut table, &mut DummyRng, &FirstWins).unwrap_err();
    assert!(matches!(err, EngineError::RoundAlreadyInProgress));
}

//
// CHECK / RAISE (scenario A)
//

#[test]
fn check_then_raise_moves_chips_into_pot() {
    let (mut table, mut engine) = start(&[600, 600, 600, 600]);

    let status = act(&mut table, &mut engine, 1, PlayerActionKind::Check).unwrap();
    assert_eq!(status, RoundStatus::AwaitingAction(2));
    assert_eq!(chips(&table, 1), Chips(600));

    let status = act(&mut table, &mut engine, 2, PlayerActionKind::Raise(Chips(100))).unwrap();
    assert_eq!(status, RoundStatus::AwaitingAction(3));
    assert_eq!(engine.pot.total, Chips(100));
    assert_eq!(chips(&table, 2), Chips(500));
    assert_eq!(engine.betting.current_max_bet, Chips(100));
    assert_eq!(engine.betting.to_call(table.player(3).unwrap()), Chips(100));
}

#[test]
fn check_facing_a_bet_is_rejected() {
    let (mut table, mut engine) = start(&[600, 600, 600]);
    act(&mut table, &mut engine, 1, PlayerActionKind::Raise(Chips(50))).unwrap();

    let err = act(&mut table, &mut engine, 2, PlayerActionKind::Check).unwrap_err();
    assert!(matches!(err, EngineError::CannotCheck { to_call } if to_call == Chips(50)));
    assert_eq!(engine.current_actor(), Some(2));
}

//
// REJECTIONS (scenario B)
//

#[test]
fn raise_beyond_stack_changes_nothing() {
    let (mut table, mut engine) = start(&[50, 600, 600]);

    let err = act(&mut table, &mut engine, 1, PlayerActionKind::Raise(Chips(100))).unwrap_err();
    assert!(matches!(
        err,
        EngineError::RaiseExceedsStack { needed, available }
            if needed == Chips(100) && available == Chips(50)
    ));
    assert_eq!(chips(&table, 1), Chips(50));
    assert_eq!(engine.pot.total, Chips::ZERO);
    assert_eq!(engine.betting.current_max_bet, Chips::ZERO);
    assert_eq!(engine.current_actor(), Some(1));
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let (mut table, mut engine) = start(&[600, 600, 600]);

    let err = act(&mut table, &mut engine, 2, PlayerActionKind::Check).unwrap_err();
    assert!(matches!(err, EngineError::NotPlayersTurn(2)));
    assert!(!table.player(2).unwrap().has_played);
    assert_eq!(engine.current_actor(), Some(1));
}

#[test]
fn zero_amounts_are_rejected() {
    let (mut table, mut engine) = start(&[600, 600]);

    let err = act(&mut table, &mut engine, 1, PlayerActionKind::Raise(Chips::ZERO)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount));

    let err = act(&mut table, &mut engine, 1, PlayerActionKind::Bet(Chips::ZERO)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount));
}

#[test]
fn bet_validation() {
    let (mut table, mut engine) = start(&[600, 600, 600]);
    act(&mut table, &mut engine, 1, PlayerActionKind::Raise(Chips(100))).unwrap();

    let err = act(&mut table, &mut engine, 2, PlayerActionKind::Bet(Chips(50))).unwrap_err();
    assert!(matches!(err, EngineError::BetBelowTableMax { .. }));

    let err = act(&mut table, &mut engine, 2, PlayerActionKind::Bet(Chips(10_000))).unwrap_err();
    assert!(matches!(err, EngineError::BetExceedsStack { .. }));

    let status = act(&mut table, &mut engine, 2, PlayerActionKind::Bet(Chips(150))).unwrap();
    assert_eq!(status, RoundStatus::AwaitingAction(3));
    assert_eq!(engine.betting.current_max_bet, Chips(150));
    assert_eq!(engine.pot.total, Chips(250));
}

//
// CALL / ALL-IN (scenario D)
//

#[test]
fn short_call_goes_all_in() {
    let (mut table, mut engine) = start(&[100, 300, 300]);

    act(&mut table, &mut engine, 1, PlayerActionKind::Raise(Chips(80))).unwrap();
    act(&mut table, &mut engine, 2, PlayerActionKind::Raise(Chips(70))).unwrap();
    assert_eq!(engine.betting.current_max_bet, Chips(150));

    let status = act(&mut table, &mut engine, 3, PlayerActionKind::Call).unwrap();
    assert_eq!(status, RoundStatus::AwaitingAction(1));
    assert_eq!(engine.betting.to_call(table.player(1).unwrap()), Chips(70));

    // 80 в банке, 20 в стеке: колл дотягивает только до 100.
    act(&mut table, &mut engine, 1, PlayerActionKind::Call).unwrap();
    let p1 = table.player(1).unwrap();
    assert!(p1.is_all_in);
    assert_eq!(p1.chip_count(), Chips::ZERO);
    assert_eq!(engine.pot.contributed_by(1), Chips(100));
    assert_eq!(engine.pot.total, Chips(400));

    // Фаза закрыта: флоп открыт, ходит игрок 2.
    assert_eq!(engine.phase(), 1);
    assert_eq!(table.common_pool.len(), 3);
    assert_eq!(engine.current_actor(), Some(2));
}

#[test]
fn all_in_player_is_skipped_until_showdown() {
    let (mut table, mut engine) = start(&[100, 300, 300]);

    act(&mut table, &mut engine, 1, PlayerActionKind::AllIn).unwrap();
    act(&mut table, &mut engine, 2, PlayerActionKind::Call).unwrap();
    act(&mut table, &mut engine, 3, PlayerActionKind::Call).unwrap();
    assert_eq!(engine.pot.total, Chips(300));

    // Ещё три фазы, игроки 2 и 3 чекают; игроку 1 ход не передаётся.
    for _ in 0..2 {
        assert_eq!(engine.current_actor(), Some(2));
        act(&mut table, &mut engine, 2, PlayerActionKind::Check).unwrap();
        assert_eq!(engine.current_actor(), Some(3));
        act(&mut table, &mut engine, 3, PlayerActionKind::Check).unwrap();
    }
    act(&mut table, &mut engine, 2, PlayerActionKind::Check).unwrap();
    let status = act(&mut table, &mut engine, 3, PlayerActionKind::Check).unwrap();

    match status {
        RoundStatus::Finished(summary) => {
            assert!(summary.showdown);
            assert_eq!(summary.winners, vec![1]);
            assert_eq!(summary.total_pot, Chips(300));
            assert_eq!(summary.community.len(), 5);
        }
        other => panic!("expected finished round, got {other:?}"),
    }
    assert_eq!(chips(&table, 1), Chips(300));

    // Только первый ход фазы 0.
    let prompts_for_one = engine
        .history
        .events
        .iter()
        .filter(|e| matches!(e.kind, TableEventKind::TurnStarted { player_id: 1, .. }))
        .count();
    assert_eq!(prompts_for_one, 1);
}

#[test]
fn all_in_raises_the_table_max() {
    let (mut table, mut engine) = start(&[600, 600]);

    act(&mut table, &mut engine, 1, PlayerActionKind::AllIn).unwrap();
    assert_eq!(engine.betting.current_max_bet, Chips(600));
    assert!(table.player(1).unwrap().is_all_in);
    assert_eq!(engine.betting.to_call(table.player(2).unwrap()), Chips(600));
}

//
// FOLD
//

#[test]
fn fold_removes_player_from_round() {
    let (mut table, mut engine) = start(&[600, 600, 600]);
    act(&mut table, &mut engine, 1, PlayerActionKind::Raise(Chips(40))).unwrap();

    let status = act(&mut table, &mut engine, 2, PlayerActionKind::Fold).unwrap();
    assert_eq!(status, RoundStatus::AwaitingAction(3));
    assert_eq!(engine.active_players, vec![1, 3]);
    assert!(table.player(2).unwrap().hand().is_empty());
    assert_eq!(chips(&table, 2), Chips(600));
    assert!(engine
        .history
        .events
        .iter()
        .any(|e| e.kind == TableEventKind::HandCleared { player_id: 2 }));
}
