//! Ranked leaderboard views over player aggregates.

use crate::logic::aggregates::{player_aggregates, AggregationFilters, PlayerAggregate};
use crate::logic::collate::cmp_locale;
use crate::models::TournamentDataset;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Metric a leaderboard ranks by.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaderboardMetric {
    Kills,
    Kda,
    Mvps,
    Assists,
    DeathsLeast,
}

/// One ranked leaderboard entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub position: u32,
    pub metric: LeaderboardMetric,
    pub value: f64,
    pub player: PlayerAggregate,
}

/// The five fixed leaderboard views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboards {
    pub kills: Vec<LeaderboardRow>,
    pub kda: Vec<LeaderboardRow>,
    pub mvps: Vec<LeaderboardRow>,
    pub assists: Vec<LeaderboardRow>,
    pub deaths_least: Vec<LeaderboardRow>,
}

/// The ranks one player holds across the five boards; `None` where the player
/// has no ranked games under the given filters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPositions {
    pub kills: Option<u32>,
    pub kda: Option<u32>,
    pub mvps: Option<u32>,
    pub assists: Option<u32>,
    pub deaths_least: Option<u32>,
}

/// Rank one metric. KDA ties prefer more games played; every remaining tie
/// breaks by nick.
fn board(
    players: &[PlayerAggregate],
    metric: LeaderboardMetric,
    value: fn(&PlayerAggregate) -> f64,
    ascending: bool,
) -> Vec<LeaderboardRow> {
    let mut ranked: Vec<&PlayerAggregate> = players.iter().collect();
    ranked.sort_by(|a, b| {
        let (value_a, value_b) = (value(a), value(b));
        let by_value = if ascending {
            value_a.total_cmp(&value_b)
        } else {
            value_b.total_cmp(&value_a)
        };
        by_value
            .then_with(|| {
                if metric == LeaderboardMetric::Kda {
                    b.games_played.cmp(&a.games_played)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| cmp_locale(&a.player_nick, &b.player_nick))
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, player)| LeaderboardRow {
            position: index as u32 + 1,
            metric,
            value: value(player),
            player: player.clone(),
        })
        .collect()
}

/// Build all five boards from the players with at least one recorded game.
pub fn compute_leaderboards(
    dataset: &TournamentDataset,
    filters: &AggregationFilters,
) -> Leaderboards {
    let players: Vec<PlayerAggregate> = player_aggregates(dataset, filters)
        .into_iter()
        .filter(|aggregate| aggregate.games_played > 0)
        .collect();

    Leaderboards {
        kills: board(&players, LeaderboardMetric::Kills, |p| f64::from(p.kills), false),
        kda: board(&players, LeaderboardMetric::Kda, |p| p.kda, false),
        mvps: board(&players, LeaderboardMetric::Mvps, |p| f64::from(p.game_mvps), false),
        assists: board(&players, LeaderboardMetric::Assists, |p| f64::from(p.assists), false),
        deaths_least: board(&players, LeaderboardMetric::DeathsLeast, |p| f64::from(p.deaths), true),
    }
}

/// Where one player ranks on each board.
pub fn player_leaderboard_positions(
    dataset: &TournamentDataset,
    player_id: &str,
    filters: &AggregationFilters,
) -> LeaderboardPositions {
    let boards = compute_leaderboards(dataset, filters);
    let find = |rows: &[LeaderboardRow]| {
        rows.iter()
            .find(|row| row.player.player_id == player_id)
            .map(|row| row.position)
    };
    LeaderboardPositions {
        kills: find(&boards.kills),
        kda: find(&boards.kda),
        mvps: find(&boards.mvps),
        assists: find(&boards.assists),
        deaths_least: find(&boards.deaths_least),
    }
}
