//! Cumulative player and team statistics, with optional team and date-range
//! restriction.

use crate::logic::collate::{cmp_locale, parse_filter_date, parse_series_date};
use crate::logic::indexes::build_indexes;
use crate::logic::mvp::series_mvp_indexed;
use crate::logic::score::{game_mvp_player_id, kda};
use crate::logic::standings::compute_standings;
use crate::models::{PlayerId, SeriesMatch, TeamId, TournamentDataset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional restriction of aggregation: one team and/or an inclusive date range.
/// `Default` means no filtering at all.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationFilters {
    pub team_id: Option<TeamId>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// One player's cumulative statistics across every in-range game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAggregate {
    pub player_id: PlayerId,
    pub player_nick: String,
    pub player_slug: String,
    pub team_id: TeamId,
    pub team_name: String,
    pub team_slug: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub games_played: u32,
    pub game_mvps: u32,
    pub series_mvps: u32,
    pub kda: f64,
}

/// One team's cumulative statistics: the sum of its players', plus the game
/// differential taken from the standings engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAggregate {
    pub team_id: TeamId,
    pub team_name: String,
    pub team_slug: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub games_played: u32,
    pub game_mvps: u32,
    pub series_mvps: u32,
    pub kda: f64,
    pub game_diff: i32,
}

#[derive(Default)]
struct StatTotals {
    kills: u32,
    deaths: u32,
    assists: u32,
    games_played: u32,
    game_mvps: u32,
    series_mvps: u32,
}

/// Inclusive day-range check. A series whose date cannot be parsed is never
/// filtered out; a filter bound that cannot be parsed imposes no bound.
fn series_in_range(series: &SeriesMatch, filters: &AggregationFilters) -> bool {
    if filters.from.is_none() && filters.to.is_none() {
        return true;
    }
    let Some(datetime) = parse_series_date(&series.date) else {
        return true;
    };
    let day = datetime.date();
    if let Some(from) = parse_filter_date(filters.from.as_deref()) {
        if day < from {
            return false;
        }
    }
    if let Some(to) = parse_filter_date(filters.to.as_deref()) {
        if day > to {
            return false;
        }
    }
    true
}

/// Cumulative stats per player over the in-range series: kills, deaths,
/// assists, games, plus derived game-MVP and series-MVP counts. Players with
/// no recorded games still get an all-zero row unless the team filter
/// excludes them. Output follows dataset player order.
pub fn player_aggregates(
    dataset: &TournamentDataset,
    filters: &AggregationFilters,
) -> Vec<PlayerAggregate> {
    let indexes = build_indexes(dataset);
    let team_filter = filters.team_id.as_deref();
    let mut totals: HashMap<&str, StatTotals> = HashMap::new();

    for series in &dataset.series_matches {
        if !series_in_range(series, filters) {
            continue;
        }

        for game in &series.games {
            for stats in &game.stats_by_player {
                let Some(player) = indexes.players_by_id.get(stats.player_id.as_str()).copied()
                else {
                    continue;
                };
                if !team_filter.map_or(true, |team_id| player.team_id == team_id) {
                    continue;
                }
                let bucket = totals.entry(player.id.as_str()).or_default();
                bucket.kills += stats.kills;
                bucket.deaths += stats.deaths;
                bucket.assists += stats.assists;
                bucket.games_played += 1;
            }

            let mvp_player = game_mvp_player_id(game)
                .and_then(|player_id| indexes.players_by_id.get(player_id).copied());
            if let Some(player) = mvp_player {
                if team_filter.map_or(true, |team_id| player.team_id == team_id) {
                    totals.entry(player.id.as_str()).or_default().game_mvps += 1;
                }
            }
        }

        if let Some(series_mvp) = series_mvp_indexed(series, &indexes) {
            if let Some(player) = indexes
                .players_by_id
                .get(series_mvp.player_id.as_str())
                .copied()
            {
                if team_filter.map_or(true, |team_id| player.team_id == team_id) {
                    totals.entry(player.id.as_str()).or_default().series_mvps += 1;
                }
            }
        }
    }

    dataset
        .players
        .iter()
        .filter(|player| team_filter.map_or(true, |team_id| player.team_id == team_id))
        .map(|player| {
            let bucket = totals.get(player.id.as_str());
            let kills = bucket.map_or(0, |totals| totals.kills);
            let deaths = bucket.map_or(0, |totals| totals.deaths);
            let assists = bucket.map_or(0, |totals| totals.assists);
            let team = indexes.teams_by_id.get(player.team_id.as_str()).copied();
            PlayerAggregate {
                player_id: player.id.clone(),
                player_nick: player.nick.clone(),
                player_slug: player.slug.clone(),
                team_id: player.team_id.clone(),
                team_name: team.map_or_else(|| player.team_id.clone(), |team| team.name.clone()),
                team_slug: team.map_or_else(|| player.team_id.clone(), |team| team.slug.clone()),
                kills,
                deaths,
                assists,
                games_played: bucket.map_or(0, |totals| totals.games_played),
                game_mvps: bucket.map_or(0, |totals| totals.game_mvps),
                series_mvps: bucket.map_or(0, |totals| totals.series_mvps),
                kda: kda(kills, deaths, assists),
            }
        })
        .collect()
}

/// Cumulative stats per team: the sum of its players' aggregates. `game_diff`
/// is copied from the standings rows so the two views cannot drift apart.
/// Sorted by team name.
pub fn team_aggregates(dataset: &TournamentDataset) -> Vec<TeamAggregate> {
    let players = player_aggregates(dataset, &AggregationFilters::default());
    let standings = compute_standings(dataset);
    let game_diff_by_team_id: HashMap<&str, i32> = standings
        .rows
        .iter()
        .map(|row| (row.team_id.as_str(), row.game_diff))
        .collect();

    let mut totals: HashMap<&str, StatTotals> = HashMap::new();
    for aggregate in &players {
        let bucket = totals.entry(aggregate.team_id.as_str()).or_default();
        bucket.kills += aggregate.kills;
        bucket.deaths += aggregate.deaths;
        bucket.assists += aggregate.assists;
        bucket.games_played += aggregate.games_played;
        bucket.game_mvps += aggregate.game_mvps;
        bucket.series_mvps += aggregate.series_mvps;
    }

    let mut rows: Vec<TeamAggregate> = dataset
        .teams
        .iter()
        .map(|team| {
            let bucket = totals.get(team.id.as_str());
            let kills = bucket.map_or(0, |totals| totals.kills);
            let deaths = bucket.map_or(0, |totals| totals.deaths);
            let assists = bucket.map_or(0, |totals| totals.assists);
            TeamAggregate {
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                team_slug: team.slug.clone(),
                kills,
                deaths,
                assists,
                games_played: bucket.map_or(0, |totals| totals.games_played),
                game_mvps: bucket.map_or(0, |totals| totals.game_mvps),
                series_mvps: bucket.map_or(0, |totals| totals.series_mvps),
                kda: kda(kills, deaths, assists),
                game_diff: game_diff_by_team_id
                    .get(team.id.as_str())
                    .copied()
                    .unwrap_or(0),
            }
        })
        .collect();

    rows.sort_by(|a, b| cmp_locale(&a.team_name, &b.team_name));
    rows
}
