//! Series MVP resolution: accumulate a player's games across one series and
//! pick the best by composite ranking.

use crate::logic::collate::cmp_locale;
use crate::logic::indexes::{build_indexes, DatasetIndexes};
use crate::logic::score::{game_mvp_player_id, kda};
use crate::models::{PlayerId, SeriesMatch, TournamentDataset};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// The series MVP and the totals that earned it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesMvpResult {
    pub player_id: PlayerId,
    pub game_mvp_count: u32,
    pub kda: f64,
}

#[derive(Default)]
struct MvpTotals {
    kills: u32,
    deaths: u32,
    assists: u32,
    game_mvps: u32,
}

/// Pick the series MVP: most game MVPs, then highest cumulative KDA, then
/// lexicographically smallest nick. `None` for a series with no games or no
/// attributable stats.
///
/// Attribution is restricted to the two competing rosters as they stand *now*:
/// team membership is resolved at call time, not frozen at series time.
pub fn series_mvp(series: &SeriesMatch, dataset: &TournamentDataset) -> Option<SeriesMvpResult> {
    let indexes = build_indexes(dataset);
    series_mvp_indexed(series, &indexes)
}

pub(crate) fn series_mvp_indexed(
    series: &SeriesMatch,
    indexes: &DatasetIndexes<'_>,
) -> Option<SeriesMvpResult> {
    if series.games.is_empty() {
        return None;
    }

    let mut roster_ids: HashSet<&str> = HashSet::new();
    for team_id in [series.team_a_id.as_str(), series.team_b_id.as_str()] {
        for player in indexes.players_by_team_id.get(team_id).into_iter().flatten() {
            roster_ids.insert(player.id.as_str());
        }
    }

    // BTreeMap keeps accumulation order deterministic for full ties.
    let mut totals: BTreeMap<&str, MvpTotals> = BTreeMap::new();

    for game in &series.games {
        if let Some(mvp_id) = game_mvp_player_id(game) {
            if roster_ids.contains(mvp_id) {
                totals.entry(mvp_id).or_default().game_mvps += 1;
            }
        }

        for stats in &game.stats_by_player {
            if !roster_ids.contains(stats.player_id.as_str()) {
                continue;
            }
            let bucket = totals.entry(stats.player_id.as_str()).or_default();
            bucket.kills += stats.kills;
            bucket.deaths += stats.deaths;
            bucket.assists += stats.assists;
        }
    }

    totals
        .iter()
        .map(|(player_id, acc)| SeriesMvpResult {
            player_id: (*player_id).to_owned(),
            game_mvp_count: acc.game_mvps,
            kda: kda(acc.kills, acc.deaths, acc.assists),
        })
        .min_by(|a, b| {
            let a_nick = indexes
                .players_by_id
                .get(a.player_id.as_str())
                .map_or(a.player_id.as_str(), |player| player.nick.as_str());
            let b_nick = indexes
                .players_by_id
                .get(b.player_id.as_str())
                .map_or(b.player_id.as_str(), |player| player.nick.as_str());
            b.game_mvp_count
                .cmp(&a.game_mvp_count)
                .then_with(|| b.kda.total_cmp(&a.kda))
                .then_with(|| cmp_locale(a_nick, b_nick))
        })
}
