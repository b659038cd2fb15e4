//! Command-line report: load a dataset JSON file and print the derived views.
//! Run with: cargo run --bin report -- path/to/dataset.json
//! Log level via env: RUST_LOG (default info).

use league_series_tracker::{
    build_indexes, compute_leaderboards, compute_standings, latest_series, AggregationFilters,
    LeaderboardRow, StandingsSource, TournamentDataset,
};
use std::fmt;
use std::fs;
use std::process::ExitCode;

/// Errors while loading the dataset file.
#[derive(Debug)]
enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read dataset file: {e}"),
            LoadError::Json(e) => write!(f, "dataset is not valid JSON: {e}"),
        }
    }
}

fn load_dataset(path: &str) -> Result<TournamentDataset, LoadError> {
    let raw = fs::read_to_string(path).map_err(LoadError::Io)?;
    serde_json::from_str(&raw).map_err(LoadError::Json)
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: report <dataset.json>");
        return ExitCode::FAILURE;
    };

    let dataset = match load_dataset(&path) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Loaded {}: {} team(s), {} player(s), {} series",
        dataset.tournament.name,
        dataset.teams.len(),
        dataset.players.len(),
        dataset.series_matches.len()
    );

    print_standings(&dataset);
    print_leaderboards(&dataset);
    print_latest_series(&dataset);
    ExitCode::SUCCESS
}

fn print_standings(dataset: &TournamentDataset) {
    let standings = compute_standings(dataset);
    let source = match standings.source {
        StandingsSource::Seed => "seed table",
        StandingsSource::Series => "recorded series",
    };
    println!("Standings ({source}):");
    println!(
        "{:<4} {:<24} {:>3} {:>3} {:>3} {:>4} {:>5} {:>7}",
        "#", "Team", "P", "W", "L", "Pts", "Diff", "Win%"
    );
    for row in &standings.rows {
        println!(
            "{:<4} {:<24} {:>3} {:>3} {:>3} {:>4} {:>+5} {:>6.1}%",
            row.position,
            row.team_name,
            row.series_played,
            row.series_won,
            row.series_lost,
            row.points,
            row.game_diff,
            row.series_win_rate
        );
    }
    println!();
}

fn print_board(title: &str, rows: &[LeaderboardRow]) {
    println!("{title}:");
    for row in rows.iter().take(5) {
        println!(
            "  {:>2}. {:<20} {:>7.2}",
            row.position, row.player.player_nick, row.value
        );
    }
    println!();
}

fn print_leaderboards(dataset: &TournamentDataset) {
    let boards = compute_leaderboards(dataset, &AggregationFilters::default());
    print_board("Most kills", &boards.kills);
    print_board("Best KDA", &boards.kda);
    print_board("Most game MVPs", &boards.mvps);
    print_board("Most assists", &boards.assists);
    print_board("Fewest deaths", &boards.deaths_least);
}

fn print_latest_series(dataset: &TournamentDataset) {
    let summaries = latest_series(dataset, 3);
    if summaries.is_empty() {
        println!("No series recorded yet.");
        return;
    }

    let indexes = build_indexes(dataset);
    let team_name = |team_id: &str| {
        indexes
            .teams_by_id
            .get(team_id)
            .map_or_else(|| team_id.to_owned(), |team| team.name.clone())
    };

    println!("Latest series:");
    for summary in &summaries {
        let series = summary.series;
        let status = match summary.winner_team_id {
            Some(winner_team_id) => format!("winner: {}", team_name(winner_team_id)),
            None => "in progress".to_owned(),
        };
        println!(
            "  {} {} vs {} - {}-{} ({status})",
            series.date,
            team_name(&series.team_a_id),
            team_name(&series.team_b_id),
            summary.score.team_a_wins,
            summary.score.team_b_wins
        );
    }
}
