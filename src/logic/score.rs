//! Series arithmetic: score tallying, winner inference, game MVP derivation,
//! kill splits and date ordering.

use crate::logic::collate::{cmp_locale, series_date_value};
use crate::logic::indexes::build_indexes;
use crate::models::{PlayerGameStats, SeriesGame, SeriesMatch, TournamentDataset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Games won by each side of a series.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesScore {
    pub team_a_wins: u32,
    pub team_b_wins: u32,
}

/// Kills split between the two sides of a game or series.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamKills {
    pub team_a_kills: u32,
    pub team_b_kills: u32,
}

/// Kill/death/assist ratio. Deaths are clamped to 1 so a deathless game
/// divides by one instead of blowing up.
pub fn kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    f64::from(kills + assists) / f64::from(deaths.max(1))
}

/// Count games won by each side. No upper bound on game count is enforced
/// here; every recorded game is summed.
pub fn series_score(series: &SeriesMatch) -> SeriesScore {
    let mut score = SeriesScore::default();
    for game in &series.games {
        if game.winner_team_id == series.team_a_id {
            score.team_a_wins += 1;
        }
        if game.winner_team_id == series.team_b_id {
            score.team_b_wins += 1;
        }
    }
    score
}

/// First side to two game wins takes the series; `None` while neither is there
/// yet, however many games (0-3) are recorded.
pub fn series_winner_team_id(series: &SeriesMatch) -> Option<&str> {
    let score = series_score(series);
    if score.team_a_wins >= 2 {
        return Some(&series.team_a_id);
    }
    if score.team_b_wins >= 2 {
        return Some(&series.team_b_id);
    }
    None
}

/// A series is complete iff it has a winner.
pub fn is_series_complete(series: &SeriesMatch) -> bool {
    series_winner_team_id(series).is_some()
}

/// Ranking used to pick a game's MVP: KDA, then kills, then assists, then
/// fewest deaths, then player id as the deterministic last resort.
fn cmp_game_mvp(a: &PlayerGameStats, b: &PlayerGameStats) -> Ordering {
    kda(b.kills, b.deaths, b.assists)
        .total_cmp(&kda(a.kills, a.deaths, a.assists))
        .then_with(|| b.kills.cmp(&a.kills))
        .then_with(|| b.assists.cmp(&a.assists))
        .then_with(|| a.deaths.cmp(&b.deaths))
        .then_with(|| cmp_locale(&a.player_id, &b.player_id))
}

/// Derive a game's MVP from its stat rows. Rows with a blank player id are
/// ignored; `None` when nothing usable remains. Row order never changes the
/// result.
pub fn infer_game_mvp(rows: &[PlayerGameStats]) -> Option<&str> {
    rows.iter()
        .filter(|row| !row.player_id.trim().is_empty())
        .min_by(|a, b| cmp_game_mvp(a, b))
        .map(|row| row.player_id.as_str())
}

/// Authoritative game MVP: always re-derived from the stat rows. The stored
/// `mvp_player_id` hint is consulted only when derivation yields nothing.
pub fn game_mvp_player_id(game: &SeriesGame) -> Option<&str> {
    infer_game_mvp(&game.stats_by_player).or_else(|| {
        if game.mvp_player_id.trim().is_empty() {
            None
        } else {
            Some(game.mvp_player_id.as_str())
        }
    })
}

/// Copy of the dataset with every game's stored MVP hint replaced by the
/// derived value. Games without usable stat rows keep their stored hint.
pub fn apply_auto_game_mvps(dataset: &TournamentDataset) -> TournamentDataset {
    let mut updated = dataset.clone();
    for series in &mut updated.series_matches {
        for game in &mut series.games {
            let derived = infer_game_mvp(&game.stats_by_player).map(str::to_owned);
            if let Some(mvp_player_id) = derived {
                game.mvp_player_id = mvp_player_id;
            }
        }
    }
    updated
}

/// Kills per side in one game, attributed through current roster membership.
/// Rows whose player cannot be resolved are skipped.
pub fn game_team_kills(
    game: &SeriesGame,
    series: &SeriesMatch,
    dataset: &TournamentDataset,
) -> TeamKills {
    let indexes = build_indexes(dataset);
    let mut totals = TeamKills::default();
    for stats in &game.stats_by_player {
        let Some(player) = indexes.players_by_id.get(stats.player_id.as_str()) else {
            continue;
        };
        if player.team_id == series.team_a_id {
            totals.team_a_kills += stats.kills;
        }
        if player.team_id == series.team_b_id {
            totals.team_b_kills += stats.kills;
        }
    }
    totals
}

/// Kills per side summed across every game of the series.
pub fn series_team_kills(series: &SeriesMatch, dataset: &TournamentDataset) -> TeamKills {
    let mut totals = TeamKills::default();
    for game in &series.games {
        let game_totals = game_team_kills(game, series, dataset);
        totals.team_a_kills += game_totals.team_a_kills;
        totals.team_b_kills += game_totals.team_b_kills;
    }
    totals
}

/// Series ordered most recent first (unparseable dates sort as the epoch),
/// ties broken by id descending.
pub fn sort_series_by_date_desc(series_matches: &[SeriesMatch]) -> Vec<&SeriesMatch> {
    let mut sorted: Vec<&SeriesMatch> = series_matches.iter().collect();
    sorted.sort_by(|a, b| {
        series_date_value(&b.date)
            .cmp(&series_date_value(&a.date))
            .then_with(|| cmp_locale(&b.id, &a.id))
    });
    sorted
}
