//! Integration tests for the dataset wire format.

use league_series_tracker::{SeriesFormat, TournamentDataset};

#[test]
fn dataset_parses_from_its_json_wire_shape() {
    let raw = r#"{
        "tournament": {
            "name": "Liga Teste",
            "lastUpdatedISO": "2026-02-23T00:00:00.000Z",
            "seriesPointsRule": { "win": 3, "loss": 0 },
            "format": "BO3"
        },
        "teams": [
            { "id": "a", "name": "Alpha", "slug": "alpha" },
            { "id": "b", "name": "Beta", "slug": "beta" }
        ],
        "players": [
            {
                "id": "a1", "nick": "A1", "slug": "a1", "teamId": "a",
                "role1": "TOP", "role2": "MID", "elo": "OURO"
            },
            {
                "id": "b1", "nick": "B1", "slug": "b1", "teamId": "b",
                "role1": "JUNG", "elo": "PRATA"
            }
        ],
        "seriesMatches": [
            {
                "id": "s1",
                "date": "2026-02-20",
                "teamAId": "a",
                "teamBId": "b",
                "games": [
                    {
                        "winnerTeamId": "a",
                        "durationMin": 32,
                        "mvpPlayerId": "a1",
                        "statsByPlayer": [
                            { "playerId": "a1", "champion": "Ahri", "kills": 8, "deaths": 2, "assists": 4 },
                            { "playerId": "b1", "kills": 3, "deaths": 5, "assists": 2 }
                        ]
                    }
                ]
            }
        ]
    }"#;

    let dataset: TournamentDataset = serde_json::from_str(raw).unwrap();

    assert_eq!(dataset.tournament.last_updated_iso, "2026-02-23T00:00:00.000Z");
    assert_eq!(dataset.tournament.format, SeriesFormat::Bo3);
    assert_eq!(dataset.tournament.series_points_rule.win, 3);
    // standingsSeed is optional on the wire.
    assert!(dataset.standings_seed.is_empty());

    assert_eq!(dataset.players[0].role2.as_deref(), Some("MID"));
    assert_eq!(dataset.players[1].role2, None);

    let series = &dataset.series_matches[0];
    assert_eq!(series.team_a_id, "a");
    let game = &series.games[0];
    assert_eq!(game.duration_min, Some(32));
    assert_eq!(game.stats_by_player[0].champion.as_deref(), Some("Ahri"));
    assert_eq!(game.stats_by_player[1].champion, None);

    // Round-tripping keeps the exact field names.
    let value = serde_json::to_value(&dataset).unwrap();
    assert!(value["tournament"]["lastUpdatedISO"].is_string());
    assert_eq!(value["tournament"]["format"], "BO3");
    assert!(value["seriesMatches"][0]["games"][0]["statsByPlayer"].is_array());
}
