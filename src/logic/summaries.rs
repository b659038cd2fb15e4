//! Read models assembled from the engine: series summaries, game histories,
//! per-side stat tables, and the combined overview.

use crate::logic::aggregates::{
    player_aggregates, team_aggregates, AggregationFilters, PlayerAggregate, TeamAggregate,
};
use crate::logic::collate::{cmp_locale, series_date_value};
use crate::logic::indexes::build_indexes;
use crate::logic::leaderboards::{compute_leaderboards, Leaderboards};
use crate::logic::mvp::{series_mvp, SeriesMvpResult};
use crate::logic::score::{
    game_mvp_player_id, is_series_complete, series_score, series_winner_team_id,
    sort_series_by_date_desc, SeriesScore,
};
use crate::logic::standings::{compute_standings, Standings};
use crate::models::{PlayerGameStats, SeriesGame, SeriesMatch, TournamentDataset};
use serde::Serialize;

/// A series with its derived facts, for listing pages.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary<'a> {
    pub series: &'a SeriesMatch,
    pub score: SeriesScore,
    pub winner_team_id: Option<&'a str>,
    pub is_complete: bool,
    pub mvp: Option<SeriesMvpResult>,
}

/// Every series, most recent first, with score, winner, completion and MVP.
pub fn series_summaries(dataset: &TournamentDataset) -> Vec<SeriesSummary<'_>> {
    sort_series_by_date_desc(&dataset.series_matches)
        .into_iter()
        .map(|series| SeriesSummary {
            series,
            score: series_score(series),
            winner_team_id: series_winner_team_id(series),
            is_complete: is_series_complete(series),
            mvp: series_mvp(series, dataset),
        })
        .collect()
}

/// The most recent `limit` series.
pub fn latest_series(dataset: &TournamentDataset, limit: usize) -> Vec<SeriesSummary<'_>> {
    let mut summaries = series_summaries(dataset);
    summaries.truncate(limit);
    summaries
}

/// Summaries of every series one team took part in.
pub fn team_series_history<'a>(
    dataset: &'a TournamentDataset,
    team_id: &str,
) -> Vec<SeriesSummary<'a>> {
    series_summaries(dataset)
        .into_iter()
        .filter(|summary| {
            summary.series.team_a_id == team_id || summary.series.team_b_id == team_id
        })
        .collect()
}

/// One line of a player's game log.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameHistoryRow<'a> {
    pub series_id: &'a str,
    pub date: &'a str,
    pub opponent_team_id: &'a str,
    pub opponent_team_name: &'a str,
    /// 1-based game number within the series.
    pub game_index: u32,
    pub champion: Option<&'a str>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Whether this player is the game's derived MVP.
    pub mvp: bool,
}

/// A player's per-game log across their current team's series, newest first
/// (later games first within a series). Unknown players get an empty log.
pub fn player_game_history<'a>(
    dataset: &'a TournamentDataset,
    player_id: &str,
) -> Vec<PlayerGameHistoryRow<'a>> {
    let indexes = build_indexes(dataset);
    let Some(player) = indexes.players_by_id.get(player_id).copied() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for series in &dataset.series_matches {
        if series.team_a_id != player.team_id && series.team_b_id != player.team_id {
            continue;
        }
        let opponent_team_id = if series.team_a_id == player.team_id {
            series.team_b_id.as_str()
        } else {
            series.team_a_id.as_str()
        };
        let opponent_team_name = indexes
            .teams_by_id
            .get(opponent_team_id)
            .map_or(opponent_team_id, |team| team.name.as_str());

        for (game_index, game) in series.games.iter().enumerate() {
            let Some(stat) = game
                .stats_by_player
                .iter()
                .find(|stats| stats.player_id == player.id)
            else {
                continue;
            };
            rows.push(PlayerGameHistoryRow {
                series_id: &series.id,
                date: &series.date,
                opponent_team_id,
                opponent_team_name,
                game_index: game_index as u32 + 1,
                champion: stat.champion.as_deref(),
                kills: stat.kills,
                deaths: stat.deaths,
                assists: stat.assists,
                mvp: game_mvp_player_id(game) == Some(player.id.as_str()),
            });
        }
    }

    rows.sort_by(|a, b| {
        series_date_value(b.date)
            .cmp(&series_date_value(a.date))
            .then_with(|| b.game_index.cmp(&a.game_index))
    });
    rows
}

/// One stat line enriched with the owning player's nick and team.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatLine<'a> {
    pub stats: &'a PlayerGameStats,
    pub player_nick: &'a str,
    pub team_id: &'a str,
}

/// A game with its stat lines split per side, for the series detail view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTeamRows<'a> {
    pub game: &'a SeriesGame,
    /// 1-based game number within the series.
    pub game_index: u32,
    pub team_a_rows: Vec<GameStatLine<'a>>,
    pub team_b_rows: Vec<GameStatLine<'a>>,
}

/// Split every game's stat rows by side (current membership), most kills
/// first, then nick. Rows whose player cannot be resolved are dropped.
pub fn series_games_with_team_rows<'a>(
    series: &'a SeriesMatch,
    dataset: &'a TournamentDataset,
) -> Vec<GameTeamRows<'a>> {
    let indexes = build_indexes(dataset);

    series
        .games
        .iter()
        .enumerate()
        .map(|(game_index, game)| {
            let mut team_a_rows = Vec::new();
            let mut team_b_rows = Vec::new();
            for stats in &game.stats_by_player {
                let Some(player) = indexes.players_by_id.get(stats.player_id.as_str()).copied()
                else {
                    continue;
                };
                let line = GameStatLine {
                    stats,
                    player_nick: &player.nick,
                    team_id: &player.team_id,
                };
                if player.team_id == series.team_a_id {
                    team_a_rows.push(line);
                } else if player.team_id == series.team_b_id {
                    team_b_rows.push(line);
                }
            }
            for rows in [&mut team_a_rows, &mut team_b_rows] {
                rows.sort_by(|a, b| {
                    b.stats
                        .kills
                        .cmp(&a.stats.kills)
                        .then_with(|| cmp_locale(a.player_nick, b.player_nick))
                });
            }
            GameTeamRows {
                game,
                game_index: game_index as u32 + 1,
                team_a_rows,
                team_b_rows,
            }
        })
        .collect()
}

/// Everything the front page needs in one call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetOverview<'a> {
    pub standings: Standings,
    pub player_aggregates: Vec<PlayerAggregate>,
    pub team_aggregates: Vec<TeamAggregate>,
    pub leaderboards: Leaderboards,
    pub series_summaries: Vec<SeriesSummary<'a>>,
}

/// Compute every derived view of the dataset at once.
pub fn dataset_overview(dataset: &TournamentDataset) -> DatasetOverview<'_> {
    DatasetOverview {
        standings: compute_standings(dataset),
        player_aggregates: player_aggregates(dataset, &AggregationFilters::default()),
        team_aggregates: team_aggregates(dataset),
        leaderboards: compute_leaderboards(dataset, &AggregationFilters::default()),
        series_summaries: series_summaries(dataset),
    }
}
