//! Играет раунды между случайными ботами, пока все фишки не окажутся у
//! одного игрока.
//!
//! Запуск: `round_sim [config.json] [seed]`

use std::env;
use std::fs;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

use card_table::domain::card::Card;
use card_table::domain::chips::Chips;
use card_table::domain::hand::Hand;
use card_table::domain::table::TableConfig;
use card_table::domain::PlayerId;
use card_table::engine::{
    EngineError, GameProgress, PlayerAction, PlayerActionKind, RoundStatus, TableSession,
};
use card_table::eval::{BestScoreWins, HandValue};
use card_table::infra::{init_tracing, DeterministicRng};

const MAX_ROUNDS: u32 = 500;
const MAX_STEPS_PER_ROUND: u32 = 500;
const RAISE_STEP: u64 = 40;

/// Игрушечная оценка: сумма старших значений всех видимых карт.
fn high_card_sum(hand: &Hand, community: &[Card]) -> HandValue {
    let total: i64 = hand
        .cards()
        .iter()
        .chain(community)
        .map(|c| i64::from(c.max_value))
        .sum();
    HandValue(total)
}

#[derive(Default)]
struct SimStats {
    rounds: u32,
    showdowns: u32,
    total_pot: u64,
    max_pot: u64,
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(msg) => {
                error!(path = %path, "{msg}");
                return ExitCode::FAILURE;
            }
        },
        None => TableConfig::poker(["Ann", "Bob", "Cid", "Dee"], TableConfig::DEFAULT_STACK),
    };
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(7);

    match run(config, seed) {
        Ok(stats) => {
            println!();
            println!("=========== ROUND SIM SUMMARY ===========");
            println!("Rounds played: {}", stats.rounds);
            println!("Showdowns: {}", stats.showdowns);
            if stats.rounds > 0 {
                println!("Average pot: {}", stats.total_pot / u64::from(stats.rounds));
                println!("Largest pot: {}", stats.max_pot);
            }
            println!("=========================================");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "симуляция прервана");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &str) -> Result<TableConfig, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("cannot read config: {e}"))?;
    TableConfig::from_json_str(&raw).map_err(|e| format!("invalid config: {e}"))
}

fn run(config: TableConfig, seed: u64) -> Result<SimStats, EngineError> {
    let policy = Box::new(BestScoreWins::new(high_card_sum));
    let dealer = DeterministicRng::from_seed(seed);
    let mut bots = StdRng::seed_from_u64(dealer.seed().wrapping_add(1));
    info!(seed = dealer.seed(), "симуляция начата");
    let mut session = TableSession::new(config, policy, dealer)?;
    let mut stats = SimStats::default();

    let mut status = session.start_round()?;
    loop {
        let mut steps = 0;
        while let RoundStatus::AwaitingAction(player_id) = status {
            steps += 1;
            if steps > MAX_STEPS_PER_ROUND {
                return Err(EngineError::Internal("round did not finish"));
            }
            let kind = pick_action(&session, player_id, &mut bots);
            status = match session.act(PlayerAction::new(player_id, kind)) {
                Ok(next) => next,
                // Бот может ошибиться; фолд допустим всегда.
                Err(_) => session.act(PlayerAction::new(player_id, PlayerActionKind::Fold))?,
            };
        }

        if let RoundStatus::Finished(summary) = &status {
            stats.rounds += 1;
            stats.total_pot += summary.total_pot.0;
            stats.max_pot = stats.max_pot.max(summary.total_pot.0);
            if summary.showdown {
                stats.showdowns += 1;
            }
        }

        if stats.rounds >= MAX_ROUNDS {
            info!(rounds = stats.rounds, "достигнут лимит раундов");
            return Ok(stats);
        }

        status = match session.next_round()? {
            GameProgress::Round(next) => next,
            GameProgress::GameOver { champion } => {
                let name = session
                    .table()
                    .player(champion)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                println!("Champion: {name} (player {champion})");
                return Ok(stats);
            }
        };
    }
}

fn pick_action(session: &TableSession<DeterministicRng>, id: PlayerId, rng: &mut StdRng) -> PlayerActionKind {
    let to_call = session.to_call(id).unwrap_or(Chips::ZERO);
    let chips = session.chip_count(id).unwrap_or(Chips::ZERO);
    let headroom = chips.0.saturating_sub(to_call.0);
    let roll: u32 = rng.gen_range(0..100);

    match roll {
        0..=4 => PlayerActionKind::AllIn,
        5..=19 if headroom > 0 => PlayerActionKind::Raise(Chips(headroom.min(RAISE_STEP))),
        20..=29 if !to_call.is_zero() => PlayerActionKind::Fold,
        _ if to_call.is_zero() => PlayerActionKind::Check,
        _ => PlayerActionKind::Call,
    }
}
