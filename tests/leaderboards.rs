//! Integration tests for the five leaderboard views.

mod common;

use common::{base_dataset, game, series, stats};
use league_series_tracker::{
    compute_leaderboards, player_leaderboard_positions, AggregationFilters, TournamentDataset,
};

fn dataset_with_one_series() -> TournamentDataset {
    let mut dataset = base_dataset();
    dataset.series_matches = vec![series(
        "s1",
        "2026-02-23",
        "a",
        "b",
        vec![
            game(
                "a",
                "a1",
                vec![
                    stats("a1", 10, 1, 5),
                    stats("a2", 2, 3, 8),
                    stats("b1", 4, 6, 2),
                    stats("b2", 1, 7, 3),
                ],
            ),
            game(
                "a",
                "a2",
                vec![
                    stats("a1", 3, 2, 4),
                    stats("a2", 8, 1, 9),
                    stats("b1", 5, 5, 2),
                    stats("b2", 2, 6, 4),
                ],
            ),
        ],
    )];
    dataset
}

#[test]
fn boards_rank_the_expected_leaders() {
    let dataset = dataset_with_one_series();
    let boards = compute_leaderboards(&dataset, &AggregationFilters::default());

    assert_eq!(boards.kills[0].player.player_id, "a1");
    assert_eq!(boards.kills[0].player.kills, 13);
    assert_eq!(boards.kills[0].value, 13.0);
    assert_eq!(boards.kills[0].position, 1);

    assert_eq!(boards.kda[0].player.player_id, "a1");
    assert_eq!(boards.assists[0].player.player_id, "a2");
    assert_eq!(boards.deaths_least[0].player.player_id, "a1");

    // a1 and a2 hold one game MVP each; nicks order the tie.
    assert_eq!(boards.mvps[0].player.player_id, "a1");
    assert_eq!(boards.mvps[1].player.player_id, "a2");

    let positions: Vec<u32> = boards.kills.iter().map(|row| row.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
}

#[test]
fn players_without_games_are_left_off_the_boards() {
    let dataset = dataset_with_one_series();
    let boards = compute_leaderboards(&dataset, &AggregationFilters::default());

    assert_eq!(boards.kills.len(), 4);
    assert!(boards
        .kills
        .iter()
        .all(|row| row.player.games_played > 0));
}

#[test]
fn kda_ties_prefer_more_games_played() {
    let mut dataset = base_dataset();
    // a1 and a2 both end at KDA 3.0, but a2 earned it over two games.
    dataset.series_matches = vec![series(
        "s1",
        "2026-02-23",
        "a",
        "b",
        vec![
            game("a", "", vec![stats("a1", 3, 1, 0), stats("a2", 3, 1, 0)]),
            game("a", "", vec![stats("a2", 3, 1, 0)]),
        ],
    )];

    let boards = compute_leaderboards(&dataset, &AggregationFilters::default());
    assert_eq!(boards.kda[0].player.player_id, "a2");
    assert_eq!(boards.kda[0].player.games_played, 2);
    assert_eq!(boards.kda[1].player.player_id, "a1");
}

#[test]
fn stale_stored_mvp_does_not_reach_the_mvp_board() {
    let mut dataset = base_dataset();
    dataset.series_matches = vec![series(
        "s1",
        "2026-02-24",
        "a",
        "b",
        vec![game(
            "a",
            "b1",
            vec![
                stats("a1", 12, 1, 8),
                stats("a2", 2, 5, 9),
                stats("b1", 4, 7, 3),
                stats("b2", 1, 6, 2),
            ],
        )],
    )];

    let boards = compute_leaderboards(&dataset, &AggregationFilters::default());
    assert_eq!(boards.mvps[0].player.player_id, "a1");
    assert_eq!(boards.mvps[0].value, 1.0);
}

#[test]
fn leaderboard_positions_for_one_player() {
    let dataset = dataset_with_one_series();
    let filters = AggregationFilters::default();

    let b1 = player_leaderboard_positions(&dataset, "b1", &filters);
    assert_eq!(b1.kills, Some(3));
    assert!(b1.kda.is_some());

    // No games recorded for c1: absent from every board.
    let c1 = player_leaderboard_positions(&dataset, "c1", &filters);
    assert_eq!(c1.kills, None);
    assert_eq!(c1.deaths_least, None);
}
