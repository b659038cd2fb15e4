//! Data structures for the league dataset: teams, players, series, seed table.

mod dataset;
mod player;
mod series;
mod team;

pub use dataset::{
    SeriesFormat, SeriesPointsRule, StandingsSeedRow, TournamentDataset, TournamentInfo,
};
pub use player::{Player, PlayerId};
pub use series::{PlayerGameStats, SeriesGame, SeriesId, SeriesMatch};
pub use team::{Team, TeamId};
