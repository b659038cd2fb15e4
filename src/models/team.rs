//! Team data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team (dataset-supplied, used in lookups and foreign keys).
pub type TeamId = String;

/// A team in the league. `id` and `slug` are unique across all teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// URL-friendly handle, unique like `id`.
    pub slug: String,
}
