//! Dataset indexing: lookup maps for teams, players and rosters.

use crate::logic::collate::cmp_locale;
use crate::models::{Player, SeriesMatch, Team, TournamentDataset};
use std::collections::HashMap;

/// Borrowed lookup maps over one dataset snapshot.
///
/// Built fresh per computation call; absent keys simply miss on lookup.
#[derive(Debug)]
pub struct DatasetIndexes<'a> {
    pub teams_by_id: HashMap<&'a str, &'a Team>,
    pub teams_by_slug: HashMap<&'a str, &'a Team>,
    pub players_by_id: HashMap<&'a str, &'a Player>,
    pub players_by_slug: HashMap<&'a str, &'a Player>,
    /// Current roster per team, sorted by nick.
    pub players_by_team_id: HashMap<&'a str, Vec<&'a Player>>,
}

/// Build all lookup maps in one pass over teams and one over players.
pub fn build_indexes(dataset: &TournamentDataset) -> DatasetIndexes<'_> {
    let mut teams_by_id = HashMap::with_capacity(dataset.teams.len());
    let mut teams_by_slug = HashMap::with_capacity(dataset.teams.len());
    for team in &dataset.teams {
        teams_by_id.insert(team.id.as_str(), team);
        teams_by_slug.insert(team.slug.as_str(), team);
    }

    let mut players_by_id = HashMap::with_capacity(dataset.players.len());
    let mut players_by_slug = HashMap::with_capacity(dataset.players.len());
    let mut players_by_team_id: HashMap<&str, Vec<&Player>> = HashMap::new();
    for player in &dataset.players {
        players_by_id.insert(player.id.as_str(), player);
        players_by_slug.insert(player.slug.as_str(), player);
        players_by_team_id
            .entry(player.team_id.as_str())
            .or_default()
            .push(player);
    }

    for roster in players_by_team_id.values_mut() {
        roster.sort_by(|a, b| cmp_locale(&a.nick, &b.nick));
    }

    DatasetIndexes {
        teams_by_id,
        teams_by_slug,
        players_by_id,
        players_by_slug,
        players_by_team_id,
    }
}

/// Team lookup by slug.
pub fn team_by_slug<'a>(dataset: &'a TournamentDataset, slug: &str) -> Option<&'a Team> {
    build_indexes(dataset).teams_by_slug.get(slug).copied()
}

/// Player lookup by slug.
pub fn player_by_slug<'a>(dataset: &'a TournamentDataset, slug: &str) -> Option<&'a Player> {
    build_indexes(dataset).players_by_slug.get(slug).copied()
}

/// Series lookup by id (linear scan; series counts stay small).
pub fn series_by_id<'a>(dataset: &'a TournamentDataset, id: &str) -> Option<&'a SeriesMatch> {
    dataset.series_matches.iter().find(|series| series.id == id)
}

/// A team's current roster, sorted by nick. Unknown teams get an empty roster.
pub fn players_for_team<'a>(dataset: &'a TournamentDataset, team_id: &str) -> Vec<&'a Player> {
    build_indexes(dataset)
        .players_by_team_id
        .get(team_id)
        .cloned()
        .unwrap_or_default()
}
