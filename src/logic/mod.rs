//! Tournament computation engine: indexing, series arithmetic, MVP resolution,
//! standings, aggregation and leaderboards. Pure functions over one immutable
//! dataset snapshot; not-found conditions come back as `None`/empty, never as
//! errors.

mod aggregates;
mod collate;
mod indexes;
mod leaderboards;
mod mvp;
mod score;
mod standings;
mod summaries;

pub use aggregates::{
    player_aggregates, team_aggregates, AggregationFilters, PlayerAggregate, TeamAggregate,
};
pub use indexes::{
    build_indexes, player_by_slug, players_for_team, series_by_id, team_by_slug, DatasetIndexes,
};
pub use leaderboards::{
    compute_leaderboards, player_leaderboard_positions, LeaderboardMetric, LeaderboardPositions,
    LeaderboardRow, Leaderboards,
};
pub use mvp::{series_mvp, SeriesMvpResult};
pub use score::{
    apply_auto_game_mvps, game_mvp_player_id, game_team_kills, infer_game_mvp, is_series_complete,
    kda, series_score, series_team_kills, series_winner_team_id, sort_series_by_date_desc,
    SeriesScore, TeamKills,
};
pub use standings::{compute_standings, Standings, StandingsRow, StandingsSource};
pub use summaries::{
    dataset_overview, latest_series, player_game_history, series_games_with_team_rows,
    series_summaries, team_series_history, DatasetOverview, GameStatLine, GameTeamRows,
    PlayerGameHistoryRow, SeriesSummary,
};
