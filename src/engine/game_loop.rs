use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::player::{Bettable, Foldable, Player};
use crate::domain::round::{Payout, RoundSummary};
use crate::domain::table::Table;
use crate::domain::PlayerId;
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::{is_betting_complete, BettingState};
use crate::engine::errors::EngineError;
use crate::engine::events::{RoundHistory, TableEventKind};
use crate::engine::positions::{first_actor, seats_after};
use crate::engine::pot::{split_pot, Pot};
use crate::engine::validation::resolve_bet_target;
use crate::engine::RandomSource;
use crate::eval::WinnerPolicy;

/// Стадия раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStage {
    /// Ждём действия текущего игрока.
    Betting,
    /// Банк выплачен, раунд ждёт сброса.
    Finished,
}

/// Статус раунда для вызывающего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// Раунд ждёт хода этого игрока.
    AwaitingAction(PlayerId),
    Finished(RoundSummary),
}

/// Состояние одного раунда: колода, банк, фаза и игроки, которые ещё
/// борются за банк.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundEngine {
    pub round_number: u32,
    pub deck: Deck,
    pub pot: Pot,
    pub betting: BettingState,
    /// Игроки раунда в порядке хода. Фолд убирает игрока отсюда,
    /// выбывание из игры происходит только при сбросе раунда.
    pub active_players: Vec<PlayerId>,
    pub stage: RoundStage,
    pub history: RoundHistory,
    pub summary: Option<RoundSummary>,
}

impl RoundEngine {
    fn new(round_number: u32, deck: Deck) -> Self {
        Self {
            round_number,
            deck,
            pot: Pot::new(),
            betting: BettingState::new(),
            active_players: Vec::new(),
            stage: RoundStage::Betting,
            history: RoundHistory::new(),
            summary: None,
        }
    }

    pub fn phase(&self) -> u32 {
        self.betting.phase
    }

    pub fn current_actor(&self) -> Option<PlayerId> {
        self.betting.current_actor
    }

    pub fn is_active(&self, player_id: PlayerId) -> bool {
        self.active_players.contains(&player_id)
    }

    pub fn is_finished(&self) -> bool {
        self.stage == RoundStage::Finished
    }

    pub fn status(&self) -> Result<RoundStatus, EngineError> {
        match self.stage {
            RoundStage::Finished => self
                .summary
                .clone()
                .map(RoundStatus::Finished)
                .ok_or(EngineError::Internal("finished round without summary")),
            RoundStage::Betting => self
                .betting
                .current_actor
                .map(RoundStatus::AwaitingAction)
                .ok_or(EngineError::Internal("betting round without an actor")),
        }
    }
}

fn player_ref(table: &Table, id: PlayerId) -> Result<&Player, EngineError> {
    table.player(id).ok_or(EngineError::PlayerNotFound(id))
}

fn player_mut(table: &mut Table, id: PlayerId) -> Result<&mut Player, EngineError> {
    table.player_mut(id).ok_or(EngineError::PlayerNotFound(id))
}

/// Запустить новый раунд:
/// - пересобрать и перемешать колоду;
/// - сбросить флаги раунда у всех, кто ещё в игре;
/// - раздать закрытые карты;
/// - передать ход первому игроку фазы 0.
pub fn start_round<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
    policy: &dyn WinnerPolicy,
) -> Result<RoundEngine, EngineError> {
    if table.round_in_progress {
        return Err(EngineError::RoundAlreadyInProgress);
    }

    let contenders: Vec<PlayerId> = table
        .player_order
        .iter()
        .copied()
        .filter(|id| table.player(*id).map_or(false, |p| !p.has_lost))
        .collect();
    if contenders.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let mut deck = Deck::from_initial(table.config.initial_cards.clone());
    deck.shuffle(rng);

    table.round_number += 1;
    table.round_in_progress = true;

    let mut engine = RoundEngine::new(table.round_number, deck);
    for &id in &contenders {
        player_mut(table, id)?.reset_for_round();
    }
    engine.active_players = contenders;

    info!(
        round = engine.round_number,
        players = ?engine.active_players,
        "раунд начат"
    );
    engine.history.push(TableEventKind::RoundStarted {
        round_number: engine.round_number,
    });

    deal_initial_cards(table, &mut engine)?;

    engine.betting.phase = 0;
    engine.history.push(TableEventKind::PhaseStarted { phase: 0 });
    start_bet_phase(table, &mut engine, policy)?;

    Ok(engine)
}

/// Закрытые карты: по одной за круг, в порядке хода.
fn deal_initial_cards(table: &mut Table, engine: &mut RoundEngine) -> Result<(), EngineError> {
    let passes = table.config.player_cards;
    for _ in 0..passes {
        for &id in &engine.active_players {
            let card = engine.deck.draw_one()?;
            let slot = player_mut(table, id)?.hand_mut().add_card(card)?;
            engine.history.push(TableEventKind::CardDealt {
                player_id: id,
                card,
                face_down: true,
                slot,
            });
        }
    }
    debug!(
        round = engine.round_number,
        cards_left = engine.deck.len(),
        "закрытые карты розданы"
    );
    Ok(())
}

fn deal_common(table: &mut Table, engine: &mut RoundEngine, count: usize) -> Result<(), EngineError> {
    for _ in 0..count {
        let card = engine.deck.draw_one()?;
        let slot = table.common_pool.push(card)?;
        engine.history.push(TableEventKind::CommunityCardDealt {
            card,
            face_down: false,
            slot,
        });
    }
    Ok(())
}

/// Начать текущую фазу: открыть её общие карты и начать торговлю.
/// За последней настроенной фазой — вскрытие.
fn start_phase(
    table: &mut Table,
    engine: &mut RoundEngine,
    policy: &dyn WinnerPolicy,
) -> Result<(), EngineError> {
    for &id in &engine.active_players {
        player_mut(table, id)?.reset_for_phase();
    }

    let phase = engine.betting.phase;
    match table.config.community_cards_for_phase(phase) {
        Some(count) => {
            debug!(round = engine.round_number, phase, count, "фаза начата");
            engine.history.push(TableEventKind::PhaseStarted { phase });
            deal_common(table, engine, count)?;
            start_bet_phase(table, engine, policy)
        }
        None => end_round(table, engine, policy),
    }
}

/// Выбрать первого игрока фазы и передать ему ход.
fn start_bet_phase(
    table: &mut Table,
    engine: &mut RoundEngine,
    policy: &dyn WinnerPolicy,
) -> Result<(), EngineError> {
    engine.betting.current_max_bet = Chips::ZERO;

    let mut first = first_actor(&table.player_order, &engine.active_players, engine.betting.phase)
        .ok_or(EngineError::Internal("no active player to open the phase"))?;

    if player_ref(table, first)?.is_all_in {
        match next_active_player(table, engine, first)? {
            Some(next) => first = next,
            None => return go_to_next_phase(table, engine, policy),
        }
    }

    if player_ref(table, first)?.has_played {
        return go_to_next_phase(table, engine, policy);
    }

    prompt(table, engine, first)
}

/// Отдать ход игроку `id` и сообщить об этом.
fn prompt(table: &Table, engine: &mut RoundEngine, id: PlayerId) -> Result<(), EngineError> {
    let player = player_ref(table, id)?;
    let to_call = engine.betting.to_call(player);
    let chip_count = player.chip_count();

    engine.betting.current_actor = Some(id);
    debug!(
        round = engine.round_number,
        phase = engine.betting.phase,
        player = id,
        %to_call,
        "ход игрока"
    );
    engine.history.push(TableEventKind::TurnStarted {
        player_id: id,
        to_call,
        chip_count,
        can_raise: to_call < chip_count,
    });
    Ok(())
}

/// Следующий после `from` активный игрок, который ещё может ставить.
///
/// Олл-ин игроки по пути помечаются как сходившие и пропускаются. Сам
/// `from` не возвращается никогда; `None` — ходить больше некому.
fn next_active_player(
    table: &mut Table,
    engine: &RoundEngine,
    from: PlayerId,
) -> Result<Option<PlayerId>, EngineError> {
    for id in seats_after(&engine.active_players, from) {
        let player = player_mut(table, id)?;
        if player.is_all_in {
            player.has_played = true;
            continue;
        }
        return Ok(Some(id));
    }
    Ok(None)
}

/// После действия: закончить раунд, закрыть фазу или передать ход.
fn go_to_next_player_bet(
    table: &mut Table,
    engine: &mut RoundEngine,
    next: Option<PlayerId>,
    policy: &dyn WinnerPolicy,
) -> Result<(), EngineError> {
    if engine.active_players.len() == 1 {
        return end_round(table, engine, policy);
    }

    let complete = is_betting_complete(
        engine
            .active_players
            .iter()
            .filter_map(|id| table.player(*id)),
        engine.betting.current_max_bet,
    );
    if complete {
        return go_to_next_phase(table, engine, policy);
    }

    match next {
        Some(id) => prompt(table, engine, id),
        None => Err(EngineError::Internal("open betting phase with nobody able to act")),
    }
}

fn go_to_next_phase(
    table: &mut Table,
    engine: &mut RoundEngine,
    policy: &dyn WinnerPolicy,
) -> Result<(), EngineError> {
    engine.betting.current_actor = None;
    engine.history.push(TableEventKind::BetPhaseClosed {
        phase: engine.betting.phase,
    });
    engine.betting.phase += 1;
    start_phase(table, engine, policy)
}

/// Применить действие текущего игрока и продвинуть раунд.
pub fn apply_action(
    table: &mut Table,
    engine: &mut RoundEngine,
    action: PlayerAction,
    policy: &dyn WinnerPolicy,
) -> Result<RoundStatus, EngineError> {
    if engine.stage != RoundStage::Betting {
        return Err(EngineError::NoActiveRound);
    }
    let actor = engine
        .betting
        .current_actor
        .ok_or(EngineError::Internal("betting round without an actor"))?;
    if action.player_id != actor {
        warn!(player = action.player_id, actor, "ход вне очереди отклонён");
        return Err(EngineError::NotPlayersTurn(action.player_id));
    }

    match action.kind {
        PlayerActionKind::Fold => fold_player(table, engine, actor, policy)?,
        kind => {
            let target = {
                let player = player_ref(table, actor)?;
                resolve_bet_target(player, &kind, engine.betting.current_max_bet)
            };
            let target = match target {
                Ok(target) => target,
                Err(err) => {
                    warn!(player = actor, action = ?kind, error = %err, "действие отклонено");
                    return Err(err);
                }
            };
            bet(table, engine, actor, target, kind, policy)?;
        }
    }

    engine.status()
}

/// Зафиксировать проверенную ставку `id` и передать ход.
fn bet(
    table: &mut Table,
    engine: &mut RoundEngine,
    id: PlayerId,
    amount: Chips,
    kind: PlayerActionKind,
    policy: &dyn WinnerPolicy,
) -> Result<(), EngineError> {
    let (paid, new_stack) = {
        let player = player_mut(table, id)?;
        let paid = player.commit_bet(amount);
        (paid, player.chip_count())
    };
    engine.pot.add(id, paid);
    if amount > engine.betting.current_max_bet {
        engine.betting.current_max_bet = amount;
    }

    debug!(
        round = engine.round_number,
        player = id,
        action = ?kind,
        %paid,
        pot = %engine.pot.total,
        "игрок сходил"
    );
    engine.history.push(TableEventKind::PlayerActed {
        player_id: id,
        action: kind,
        chips_paid: paid,
        new_stack,
        pot_after: engine.pot.total,
    });
    engine.betting.current_actor = None;

    let next = next_active_player(table, engine, id)?;
    go_to_next_player_bet(table, engine, next, policy)
}

/// Убрать `id` из раунда. Следующий игрок считается по составу
/// активных до удаления.
fn fold_player(
    table: &mut Table,
    engine: &mut RoundEngine,
    id: PlayerId,
    policy: &dyn WinnerPolicy,
) -> Result<(), EngineError> {
    let new_stack = {
        let player = player_mut(table, id)?;
        player.fold();
        player.chip_count()
    };

    debug!(round = engine.round_number, player = id, "фолд");
    engine.history.push(TableEventKind::PlayerActed {
        player_id: id,
        action: PlayerActionKind::Fold,
        chips_paid: Chips::ZERO,
        new_stack,
        pot_after: engine.pot.total,
    });
    engine
        .history
        .push(TableEventKind::HandCleared { player_id: id });
    engine.betting.current_actor = None;

    let next = next_active_player(table, engine, id)?;
    engine.active_players.retain(|p| *p != id);
    go_to_next_player_bet(table, engine, next, policy)
}

/// Вскрытие: открыть карты, определить победителей, выплатить банк.
///
/// Если политика вернула недопустимый набор, каждому возвращается его
/// вклад, раунд всё равно закрывается (его можно сбросить), а ошибка
/// `InvalidWinnerSet` уходит вызывающему.
fn end_round(
    table: &mut Table,
    engine: &mut RoundEngine,
    policy: &dyn WinnerPolicy,
) -> Result<(), EngineError> {
    engine.betting.current_actor = None;
    for &id in &engine.active_players {
        engine
            .history
            .push(TableEventKind::CardsRevealed { player_id: id });
    }

    let community = table.common_pool.cards().to_vec();
    let showdown = engine.active_players.len() > 1;
    let mut outcome = Ok(());

    let picked = if showdown {
        let contenders: Vec<&Player> = engine
            .active_players
            .iter()
            .filter_map(|id| table.player(*id))
            .collect();
        let picked = policy.winners(&contenders, &community);
        checked_winners(&engine.active_players, &picked).map_err(|err| (err, picked))
    } else {
        Ok(engine.active_players.clone())
    };

    let (winners, payouts) = match picked {
        Ok(winners) => {
            let payouts = give_chips_to_winners(table, engine, &winners)?;
            (winners, payouts)
        }
        Err((err, picked)) => {
            warn!(
                round = engine.round_number,
                picked = ?picked,
                contenders = ?engine.active_players,
                "недопустимый набор победителей, ставки возвращены"
            );
            outcome = Err(err);
            (Vec::new(), refund_contributions(table, engine)?)
        }
    };

    let summary = RoundSummary {
        round_number: engine.round_number,
        phase_reached: engine.betting.phase,
        community,
        total_pot: engine.pot.total,
        winners: winners.clone(),
        payouts,
        showdown,
    };

    info!(
        round = engine.round_number,
        winners = ?winners,
        pot = %engine.pot.total,
        showdown,
        "раунд завершён"
    );
    engine.history.push(TableEventKind::RoundEnded {
        round_number: engine.round_number,
        winners,
    });
    engine.summary = Some(summary);
    engine.stage = RoundStage::Finished;
    outcome
}

/// Победители в порядке хода; пустой набор и чужие id — ошибка.
fn checked_winners(active: &[PlayerId], picked: &[PlayerId]) -> Result<Vec<PlayerId>, EngineError> {
    if picked.iter().any(|id| !active.contains(id)) {
        return Err(EngineError::InvalidWinnerSet);
    }
    let winners: Vec<PlayerId> = active
        .iter()
        .copied()
        .filter(|id| picked.contains(id))
        .collect();
    if winners.is_empty() {
        return Err(EngineError::InvalidWinnerSet);
    }
    Ok(winners)
}

fn give_chips_to_winners(
    table: &mut Table,
    engine: &mut RoundEngine,
    winners: &[PlayerId],
) -> Result<Vec<Payout>, EngineError> {
    let payouts = split_pot(engine.pot.total, winners);
    pay_out(table, engine, payouts)
}

/// Вернуть каждому его вклад в банк.
fn refund_contributions(table: &mut Table, engine: &mut RoundEngine) -> Result<Vec<Payout>, EngineError> {
    let payouts = engine
        .pot
        .contributions
        .iter()
        .map(|(&player_id, &amount)| Payout { player_id, amount })
        .collect();
    pay_out(table, engine, payouts)
}

fn pay_out(
    table: &mut Table,
    engine: &mut RoundEngine,
    payouts: Vec<Payout>,
) -> Result<Vec<Payout>, EngineError> {
    for payout in &payouts {
        player_mut(table, payout.player_id)?.receive(payout.amount);
        engine.history.push(TableEventKind::PotAwarded {
            player_id: payout.player_id,
            amount: payout.amount,
        });
    }
    engine.pot.awarded = true;
    Ok(payouts)
}

/// Граница раундов:
/// - очистить все руки и общие карты;
/// - исключить игроков без фишек;
/// - сдвинуть порядок хода;
/// - обнулить банк, максимальную ставку и фазу.
pub fn reset_round(table: &mut Table, engine: &mut RoundEngine) -> Result<(), EngineError> {
    if engine.stage != RoundStage::Finished {
        return Err(EngineError::RoundStillInProgress);
    }

    engine.active_players.clear();

    let mut eliminated = Vec::new();
    for player in table.players.iter_mut() {
        if !player.hand().is_empty() {
            player.clear_hand();
            engine
                .history
                .push(TableEventKind::HandCleared { player_id: player.id });
        }
        if !player.has_lost && player.verify_lose_condition() {
            eliminated.push(player.id);
        }
    }
    for id in eliminated {
        table.remove_from_player_order(id);
        info!(round = engine.round_number, player = id, "игрок выбыл");
        engine
            .history
            .push(TableEventKind::PlayerEliminated { player_id: id });
    }

    table.rotate_player_order();

    table.common_pool.clear();
    engine.history.push(TableEventKind::CommonPoolCleared);

    engine.pot.reset();
    engine.betting = BettingState::new();
    table.round_in_progress = false;
    Ok(())
}
