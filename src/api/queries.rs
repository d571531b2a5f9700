use crate::domain::chips::Chips;
use crate::domain::player::{Bettable, Player};
use crate::domain::table::Table;
use crate::domain::PlayerId;
use crate::engine::RoundEngine;

use super::dto::{PlayerViewDto, TableViewDto};

/// Собрать DTO стола из `Table` и текущего раунда (если он есть).
///
/// `is_hero` решает, чьи закрытые карты видны. После вскрытия карты всех
/// претендентов видны до сброса раунда.
pub fn build_table_view(
    table: &Table,
    round: Option<&RoundEngine>,
    is_hero: impl Fn(PlayerId) -> bool,
) -> TableViewDto {
    let showdown = round
        .and_then(|r| r.summary.as_ref())
        .map_or(false, |s| s.showdown);

    let players = table
        .players
        .iter()
        .map(|p| {
            let in_round = round.map_or(false, |r| r.is_active(p.id));
            let visible = is_hero(p.id) || (showdown && in_round);
            player_view(p, in_round, visible)
        })
        .collect();

    let current_actor = round.and_then(|r| r.current_actor());
    let to_call = round.and_then(|r| {
        let actor = table.player(r.current_actor()?)?;
        Some(r.betting.to_call(actor))
    });

    TableViewDto {
        round_number: table.round_number,
        round_in_progress: table.round_in_progress,
        phase: round.map_or(0, |r| r.phase()),
        pot_total: round.map_or(Chips::ZERO, |r| r.pot.total),
        current_max_bet: round.map_or(Chips::ZERO, |r| r.betting.current_max_bet),
        community: table.common_pool.cards().to_vec(),
        players,
        current_actor,
        to_call,
    }
}

fn player_view(player: &Player, in_round: bool, visible: bool) -> PlayerViewDto {
    PlayerViewDto {
        player_id: player.id,
        name: player.name.clone(),
        chip_count: player.chip_count(),
        current_bet: player.current_bet(),
        status: player.status(in_round),
        hand: if visible {
            Some(player.hand().cards().to_vec())
        } else {
            None
        },
    }
}
