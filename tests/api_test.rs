// tests/api_test.rs

//! Тесты API-слоя: разбор команд, маппинг ошибок и представления стола.

use card_table::api::{build_table_view, execute, ApiError, Command, CommandResponse};
use card_table::domain::{
    card::Card,
    chips::Chips,
    player::{Player, PlayerStatus},
    table::TableConfig,
    PlayerId,
};
use card_table::engine::{PlayerAction, PlayerActionKind, RandomSource, TableSession};
use card_table::eval::WinnerPolicy;

struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

struct FirstWins;

impl WinnerPolicy for FirstWins {
    fn winners(&self, contenders: &[&Player], _community: &[Card]) -> Vec<PlayerId> {
        vec![contenders[0].id]
    }
}

fn make_session(names: &[&str]) -> TableSession<DummyRng> {
    let config = TableConfig::poker(names.iter().copied(), TableConfig::DEFAULT_STACK);
    TableSession::new(config, Box::new(FirstWins), DummyRng).unwrap()
}

fn act(player_id: PlayerId, kind: PlayerActionKind) -> Command {
    Command::Act(PlayerAction::new(player_id, kind))
}

#[test]
fn commands_drive_a_round() {
    let mut session = make_session(&["Ann", "Bob"]);

    let resp = execute(&mut session, Command::StartRound).unwrap();
    assert_eq!(resp, CommandResponse::AwaitingAction { player_id: 1 });

    let resp = execute(&mut session, act(1, PlayerActionKind::Raise(Chips(25)))).unwrap();
    assert_eq!(resp, CommandResponse::AwaitingAction { player_id: 2 });

    let resp = execute(&mut session, act(2, PlayerActionKind::Fold)).unwrap();
    match resp {
        CommandResponse::RoundFinished(summary) => {
            assert_eq!(summary.winners, vec![1]);
            assert_eq!(summary.total_pot, Chips(25));
            assert!(!summary.showdown);
        }
        other => panic!("expected finished round, got {other:?}"),
    }

    let resp = execute(&mut session, Command::NextRound).unwrap();
    assert_eq!(resp, CommandResponse::AwaitingAction { player_id: 2 });
}

#[test]
fn engine_errors_map_to_api_errors() {
    let mut session = make_session(&["Ann", "Bob"]);
    execute(&mut session, Command::StartRound).unwrap();

    let err = execute(&mut session, act(2, PlayerActionKind::Check)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));

    let err = execute(&mut session, act(1, PlayerActionKind::Raise(Chips(5_000)))).unwrap_err();
    assert!(matches!(err, ApiError::RejectedAction(_)));

    let err = execute(&mut session, Command::PeekCards { player_id: 42 }).unwrap_err();
    assert_eq!(err, ApiError::PlayerNotAtTable(42));
}

#[test]
fn peek_and_hide_commands() {
    let mut session = make_session(&["Ann", "Bob"]);
    execute(&mut session, Command::StartRound).unwrap();

    let resp = execute(&mut session, Command::PeekCards { player_id: 1 }).unwrap();
    let expected: Vec<Card> = vec!["As".parse().unwrap(), "Qs".parse().unwrap()];
    assert_eq!(resp, CommandResponse::Cards(expected));

    let resp = execute(&mut session, Command::HideCards { player_id: 1 }).unwrap();
    assert_eq!(resp, CommandResponse::Ok);
}

#[test]
fn command_from_json() {
    let cmd: Command = serde_json::from_str(r#"{"Act":{"player_id":1,"kind":{"Bet":50}}}"#).unwrap();
    match cmd {
        Command::Act(action) => {
            assert_eq!(action.player_id, 1);
            assert_eq!(action.kind, PlayerActionKind::Bet(Chips(50)));
        }
        other => panic!("unexpected command {other:?}"),
    }

    let bad = serde_json::from_str::<Command>("{\"Dance\":null}").map_err(ApiError::from);
    assert!(matches!(bad, Err(ApiError::BadRequest(_))));
}

#[test]
fn table_view_hides_other_hands_until_showdown() {
    let mut session = make_session(&["Ann", "Bob"]);
    execute(&mut session, Command::StartRound).unwrap();

    let view = build_table_view(session.table(), session.round(), |id| id == 1);
    assert_eq!(view.round_number, 1);
    assert!(view.round_in_progress);
    assert_eq!(view.current_actor, Some(1));
    assert_eq!(view.to_call, Some(Chips::ZERO));
    assert!(view.players[0].hand.is_some());
    assert!(view.players[1].hand.is_none());
    assert_eq!(view.players[0].status, PlayerStatus::Waiting);

    // Чекаем до вскрытия.
    for _ in 0..8 {
        let actor = session.current_actor().unwrap();
        execute(&mut session, act(actor, PlayerActionKind::Check)).unwrap();
    }

    let view = build_table_view(session.table(), session.round(), |id| id == 1);
    assert_eq!(view.current_actor, None);
    assert_eq!(view.community.len(), 5);
    assert_eq!(view.players[1].hand.as_ref().map(Vec::len), Some(2));
}

#[test]
fn folded_player_shows_as_folded() {
    let mut session = make_session(&["Ann", "Bob", "Cid"]);
    execute(&mut session, Command::StartRound).unwrap();
    execute(&mut session, act(1, PlayerActionKind::Fold)).unwrap();

    let view = build_table_view(session.table(), session.round(), |_| false);
    assert_eq!(view.players[0].status, PlayerStatus::Folded);
    assert_eq!(view.players[1].status, PlayerStatus::Waiting);
    assert_eq!(view.current_actor, Some(2));
}
