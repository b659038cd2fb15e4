//! Amateur league tracker: the dataset model and the computation engine that
//! turns recorded best-of-three series into standings, MVPs and leaderboards.

pub mod logic;
pub mod models;

pub use logic::{
    apply_auto_game_mvps, build_indexes, compute_leaderboards, compute_standings,
    dataset_overview, game_mvp_player_id, game_team_kills, infer_game_mvp, is_series_complete,
    kda, latest_series, player_aggregates, player_by_slug, player_game_history,
    player_leaderboard_positions, players_for_team, series_by_id, series_games_with_team_rows,
    series_mvp, series_score, series_summaries, series_team_kills, series_winner_team_id,
    sort_series_by_date_desc, team_aggregates, team_by_slug, team_series_history,
    AggregationFilters, DatasetIndexes, DatasetOverview, GameStatLine, GameTeamRows,
    LeaderboardMetric, LeaderboardPositions, LeaderboardRow, Leaderboards, PlayerAggregate,
    PlayerGameHistoryRow, SeriesMvpResult, SeriesScore, SeriesSummary, Standings, StandingsRow,
    StandingsSource, TeamAggregate, TeamKills,
};
pub use models::{
    Player, PlayerGameStats, PlayerId, SeriesFormat, SeriesGame, SeriesId, SeriesMatch,
    SeriesPointsRule, StandingsSeedRow, Team, TeamId, TournamentDataset, TournamentInfo,
};
