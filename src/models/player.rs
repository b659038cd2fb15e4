//! Player data structure.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a player (dataset-supplied, used in stats rows and lookups).
pub type PlayerId = String;

/// A player on a team's roster. Roster membership is derived by grouping on `team_id`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub nick: String,
    /// URL-friendly handle, unique like `id`.
    pub slug: String,
    pub team_id: TeamId,
    /// Primary role (e.g. TOP, JUNG, MID).
    pub role1: String,
    /// Secondary role, if any.
    #[serde(default)]
    pub role2: Option<String>,
    /// Self-reported ranked tier, free-form text.
    pub elo: String,
}
