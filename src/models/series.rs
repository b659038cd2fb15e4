//! Best-of-three series: the match, its games, and per-player game stats.

use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a series.
pub type SeriesId = String;

/// One player's performance in one game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameStats {
    pub player_id: PlayerId,
    /// Champion played, if recorded.
    #[serde(default)]
    pub champion: Option<String>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

/// A single game inside a series.
///
/// `mvp_player_id` is a stored hint (legacy/manual entry); the authoritative game
/// MVP is always re-derived from `stats_by_player`, and the stored value is only
/// consulted when derivation yields nothing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesGame {
    /// Must be the enclosing series' team A or team B.
    pub winner_team_id: TeamId,
    #[serde(default)]
    pub duration_min: Option<u32>,
    pub mvp_player_id: PlayerId,
    /// At most 20 rows, one per player, unique `player_id` within the game.
    pub stats_by_player: Vec<PlayerGameStats>,
}

/// A best-of-three series between two distinct teams. At most 3 games recorded;
/// fewer means the series is still in progress (or was a 2-0).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesMatch {
    pub id: SeriesId,
    /// ISO date or datetime string; unparseable values sort as the epoch.
    pub date: String,
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    pub games: Vec<SeriesGame>,
}
