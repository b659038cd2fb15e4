//! Shared dataset builders for the integration tests.
#![allow(dead_code)]

use league_series_tracker::{
    Player, PlayerGameStats, SeriesFormat, SeriesGame, SeriesMatch, SeriesPointsRule,
    StandingsSeedRow, Team, TournamentDataset, TournamentInfo,
};

pub fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.into(),
        name: name.into(),
        slug: name.to_lowercase(),
    }
}

pub fn player(id: &str, nick: &str, team_id: &str) -> Player {
    Player {
        id: id.into(),
        nick: nick.into(),
        slug: nick.to_lowercase(),
        team_id: team_id.into(),
        role1: "TOP".into(),
        role2: None,
        elo: "GOLD".into(),
    }
}

pub fn stats(player_id: &str, kills: u32, deaths: u32, assists: u32) -> PlayerGameStats {
    PlayerGameStats {
        player_id: player_id.into(),
        champion: None,
        kills,
        deaths,
        assists,
    }
}

pub fn game(winner_team_id: &str, mvp_player_id: &str, rows: Vec<PlayerGameStats>) -> SeriesGame {
    SeriesGame {
        winner_team_id: winner_team_id.into(),
        duration_min: Some(30),
        mvp_player_id: mvp_player_id.into(),
        stats_by_player: rows,
    }
}

pub fn series(
    id: &str,
    date: &str,
    team_a_id: &str,
    team_b_id: &str,
    games: Vec<SeriesGame>,
) -> SeriesMatch {
    SeriesMatch {
        id: id.into(),
        date: date.into(),
        team_a_id: team_a_id.into(),
        team_b_id: team_b_id.into(),
        games,
    }
}

/// A 2-1 series: `winner_team_id` takes games one and three.
pub fn series_2_1(
    id: &str,
    date: &str,
    team_a_id: &str,
    team_b_id: &str,
    winner_team_id: &str,
) -> SeriesMatch {
    let loser_team_id = if winner_team_id == team_a_id {
        team_b_id
    } else {
        team_a_id
    };
    series(
        id,
        date,
        team_a_id,
        team_b_id,
        vec![
            game(winner_team_id, "", vec![]),
            game(loser_team_id, "", vec![]),
            game(winner_team_id, "", vec![]),
        ],
    )
}

/// A 2-0 sweep for `winner_team_id`.
pub fn series_2_0(
    id: &str,
    date: &str,
    team_a_id: &str,
    team_b_id: &str,
    winner_team_id: &str,
) -> SeriesMatch {
    series(
        id,
        date,
        team_a_id,
        team_b_id,
        vec![
            game(winner_team_id, "", vec![]),
            game(winner_team_id, "", vec![]),
        ],
    )
}

/// Three teams (Alpha/Beta/Charlie) with two players each, no series recorded,
/// and a pure win/loss seed table.
pub fn base_dataset() -> TournamentDataset {
    TournamentDataset {
        tournament: TournamentInfo {
            name: "Liga Teste".into(),
            last_updated_iso: "2026-02-23T00:00:00.000Z".into(),
            series_points_rule: SeriesPointsRule { win: 3, loss: 0 },
            format: SeriesFormat::Bo3,
        },
        teams: vec![team("a", "Alpha"), team("b", "Beta"), team("c", "Charlie")],
        players: vec![
            player("a1", "A1", "a"),
            player("a2", "A2", "a"),
            player("b1", "B1", "b"),
            player("b2", "B2", "b"),
            player("c1", "C1", "c"),
            player("c2", "C2", "c"),
        ],
        series_matches: Vec::new(),
        standings_seed: vec![
            StandingsSeedRow {
                team_id: "a".into(),
                played: 3,
                points: 9,
            },
            StandingsSeedRow {
                team_id: "b".into(),
                played: 3,
                points: 6,
            },
            StandingsSeedRow {
                team_id: "c".into(),
                played: 3,
                points: 0,
            },
        ],
    }
}
