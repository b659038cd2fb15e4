//! Tournament metadata and the dataset aggregate root.

use crate::models::player::Player;
use crate::models::series::SeriesMatch;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Points awarded to each side of a completed series.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPointsRule {
    pub win: u32,
    pub loss: u32,
}

impl SeriesPointsRule {
    /// True when the rule is pure win/loss (win pays, loss pays nothing).
    /// Only then can series wins be back-inferred from seed points.
    pub fn is_pure_win_loss(&self) -> bool {
        self.win > 0 && self.loss == 0
    }
}

/// Series format played in this league.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeriesFormat {
    #[default]
    #[serde(rename = "BO3")]
    Bo3,
}

/// League-wide metadata.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentInfo {
    pub name: String,
    #[serde(rename = "lastUpdatedISO")]
    pub last_updated_iso: String,
    pub series_points_rule: SeriesPointsRule,
    pub format: SeriesFormat,
}

/// A pre-season or carried-over baseline standings entry.
/// Used only while no series have been recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsSeedRow {
    pub team_id: TeamId,
    pub played: u32,
    pub points: u32,
}

/// The aggregate root every computation operates on.
///
/// Treated as an immutable value per call: the engine never mutates it, and the
/// external admin workflow replaces it atomically after re-validation. All id,
/// slug and foreign-key invariants are the external validator's responsibility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDataset {
    pub tournament: TournamentInfo,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub series_matches: Vec<SeriesMatch>,
    #[serde(default)]
    pub standings_seed: Vec<StandingsSeedRow>,
}
