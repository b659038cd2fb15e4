//! Standings engine: seed- or series-sourced league table with multi-level
//! tie-break resolution.

use crate::logic::collate::cmp_locale;
use crate::logic::score::{series_score, series_winner_team_id};
use crate::models::{Team, TeamId, TournamentDataset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Which source produced the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsSource {
    Seed,
    Series,
}

/// One team's row in the league table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    /// 1-based rank, assigned after all tie-breaks resolve.
    pub position: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub team_slug: String,
    pub series_played: u32,
    pub series_won: u32,
    pub series_lost: u32,
    pub points: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub game_diff: i32,
    /// Percentage, 0-100.
    pub series_win_rate: f64,
    pub from_seed: bool,
}

/// The computed league table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub source: StandingsSource,
    pub rows: Vec<StandingsRow>,
}

/// Build the league table. The seed table is used only while no series exist;
/// a single recorded series, winner or not, switches to series mode and the
/// seed is ignored entirely.
pub fn compute_standings(dataset: &TournamentDataset) -> Standings {
    if dataset.series_matches.is_empty() {
        Standings {
            source: StandingsSource::Seed,
            rows: seed_rows(dataset),
        }
    } else {
        Standings {
            source: StandingsSource::Series,
            rows: series_rows(dataset),
        }
    }
}

fn blank_row(team: &Team, from_seed: bool) -> StandingsRow {
    StandingsRow {
        position: 0,
        team_id: team.id.clone(),
        team_name: team.name.clone(),
        team_slug: team.slug.clone(),
        series_played: 0,
        series_won: 0,
        series_lost: 0,
        points: 0,
        games_won: 0,
        games_lost: 0,
        game_diff: 0,
        series_win_rate: 0.0,
        from_seed,
    }
}

fn win_rate(series_won: u32, series_played: u32) -> f64 {
    if series_played > 0 {
        f64::from(series_won) / f64::from(series_played) * 100.0
    } else {
        0.0
    }
}

/// One row per team from the seed table; teams without a seed entry stay
/// zeroed. Game columns are always zero here (no game-level data exists yet).
fn seed_rows(dataset: &TournamentDataset) -> Vec<StandingsRow> {
    let rule = dataset.tournament.series_points_rule;
    let seed_by_team_id: HashMap<&str, _> = dataset
        .standings_seed
        .iter()
        .map(|seed| (seed.team_id.as_str(), seed))
        .collect();

    let rows = dataset
        .teams
        .iter()
        .map(|team| {
            let seed = seed_by_team_id.get(team.id.as_str());
            let series_played = seed.map_or(0, |seed| seed.played);
            let points = seed.map_or(0, |seed| seed.points);
            // Series wins can only be reconstructed under a pure win/loss rule.
            let series_won = if rule.is_pure_win_loss() {
                series_played.min(points / rule.win)
            } else {
                0
            };

            let mut row = blank_row(team, true);
            row.series_played = series_played;
            row.series_won = series_won;
            row.series_lost = series_played.saturating_sub(series_won);
            row.points = points;
            row.series_win_rate = win_rate(series_won, series_played);
            row
        })
        .collect();

    sort_rows(rows, dataset)
}

/// One row per team accumulated from every series that has a winner.
/// Incomplete series contribute nothing.
fn series_rows(dataset: &TournamentDataset) -> Vec<StandingsRow> {
    let rule = dataset.tournament.series_points_rule;
    let mut rows: Vec<StandingsRow> = dataset
        .teams
        .iter()
        .map(|team| blank_row(team, false))
        .collect();
    let index_of: HashMap<&str, usize> = dataset
        .teams
        .iter()
        .enumerate()
        .map(|(index, team)| (team.id.as_str(), index))
        .collect();

    for series in &dataset.series_matches {
        let Some(winner_team_id) = series_winner_team_id(series) else {
            continue;
        };
        let (Some(&a_index), Some(&b_index)) = (
            index_of.get(series.team_a_id.as_str()),
            index_of.get(series.team_b_id.as_str()),
        ) else {
            continue;
        };

        let score = series_score(series);
        rows[a_index].series_played += 1;
        rows[b_index].series_played += 1;
        rows[a_index].games_won += score.team_a_wins;
        rows[a_index].games_lost += score.team_b_wins;
        rows[b_index].games_won += score.team_b_wins;
        rows[b_index].games_lost += score.team_a_wins;

        let (winner_index, loser_index) = if winner_team_id == series.team_a_id {
            (a_index, b_index)
        } else {
            (b_index, a_index)
        };
        rows[winner_index].series_won += 1;
        rows[winner_index].points += rule.win;
        rows[loser_index].series_lost += 1;
        rows[loser_index].points += rule.loss;
    }

    for row in &mut rows {
        row.game_diff = row.games_won as i32 - row.games_lost as i32;
        row.series_win_rate = win_rate(row.series_won, row.series_played);
    }

    sort_rows(rows, dataset)
}

/// The base ranking keys: points, series won, game differential. Team name is
/// deliberately left out; it orders rows but never defines a tied group.
fn cmp_base(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.series_won.cmp(&a.series_won))
        .then_with(|| b.game_diff.cmp(&a.game_diff))
}

/// Head-to-head comparison across *every* completed meeting of the pair, in
/// either orientation: series wins first, then the games differential between
/// the two. `Equal` when they never met or split evenly.
fn cmp_head_to_head(team_a_id: &str, team_b_id: &str, dataset: &TournamentDataset) -> Ordering {
    let mut a_series_wins = 0u32;
    let mut b_series_wins = 0u32;
    let mut a_games_won = 0i32;
    let mut b_games_won = 0i32;

    for series in &dataset.series_matches {
        let forward = series.team_a_id == team_a_id && series.team_b_id == team_b_id;
        let reverse = series.team_a_id == team_b_id && series.team_b_id == team_a_id;
        if !forward && !reverse {
            continue;
        }
        let Some(winner) = series_winner_team_id(series) else {
            continue;
        };

        if winner == team_a_id {
            a_series_wins += 1;
        }
        if winner == team_b_id {
            b_series_wins += 1;
        }

        let score = series_score(series);
        let (a_wins, b_wins) = if forward {
            (score.team_a_wins, score.team_b_wins)
        } else {
            (score.team_b_wins, score.team_a_wins)
        };
        a_games_won += a_wins as i32;
        b_games_won += b_wins as i32;
    }

    b_series_wins.cmp(&a_series_wins).then_with(|| {
        let a_diff = a_games_won - b_games_won;
        let b_diff = b_games_won - a_games_won;
        b_diff.cmp(&a_diff)
    })
}

/// Base sort, then resolve consecutive runs tied on the numeric keys: exactly
/// two teams go to head-to-head, three or more fall back to the alphabet (an
/// intentional simplification for a league this size), singletons stay put.
/// Positions are assigned 1-based once every group is settled.
fn sort_rows(mut rows: Vec<StandingsRow>, dataset: &TournamentDataset) -> Vec<StandingsRow> {
    rows.sort_by(|a, b| cmp_base(a, b).then_with(|| cmp_locale(&a.team_name, &b.team_name)));

    let mut start = 0;
    while start < rows.len() {
        let mut end = start + 1;
        while end < rows.len() && cmp_base(&rows[start], &rows[end]) == Ordering::Equal {
            end += 1;
        }

        let group = &mut rows[start..end];
        if group.len() == 2 {
            group.sort_by(|a, b| {
                cmp_head_to_head(&a.team_id, &b.team_id, dataset)
                    .then_with(|| cmp_locale(&a.team_name, &b.team_name))
            });
        } else if group.len() > 2 {
            group.sort_by(|a, b| cmp_locale(&a.team_name, &b.team_name));
        }

        start = end;
    }

    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index as u32 + 1;
    }
    rows
}
