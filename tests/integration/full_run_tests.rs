//! Complete runs over HTTP, the way the command line tool drives them

use axum::http::StatusCode;
use random_player::{GameEnd, GameRunner, HttpGameServer, PlayerConfig, RunConfig};
use crate::mocks::{FixtureBehavior, TestGameServer};

async fn run(behavior: FixtureBehavior, run: RunConfig) -> (TestGameServer, random_player::RunSummary) {
    let fixture = TestGameServer::start(behavior).await;

    let mut config = PlayerConfig::default();
    config.server.base_url = fixture.base_url();
    config.run = run;
    config.validate().unwrap();

    let server = HttpGameServer::new(&config.server).unwrap();
    let mut runner = GameRunner::from_config(server, &config.run);
    let summary = runner.play_many_games(config.run.games).await;
    (fixture, summary)
}

#[tokio::test]
async fn test_default_shaped_run_plays_every_game() {
    let (fixture, summary) = run(
        FixtureBehavior::default(),
        RunConfig {
            seed: Some(1),
            ..Default::default()
        },
    )
    .await;

    assert_eq!(summary.games_played(), 50);
    assert_eq!(fixture.games_created(), 50);
    assert_eq!(summary.winner_counts().get("WinBlack"), Some(&50));
    assert!(summary.records.iter().all(|r| r.moves == 3));
}

#[tokio::test]
async fn test_undecided_games_stop_at_cap() {
    let (fixture, summary) = run(
        FixtureBehavior {
            decide_after: None,
            ..Default::default()
        },
        RunConfig {
            games: 2,
            max_moves: 25,
            seed: Some(2),
        },
    )
    .await;

    assert_eq!(summary.capped(), 2);
    assert_eq!(fixture.actions_for("1").len(), 25);
    assert_eq!(fixture.actions_for("2").len(), 25);
}

#[tokio::test]
async fn test_start_rejection_aborts_over_http() {
    let (fixture, summary) = run(
        FixtureBehavior {
            new_game_status: Some(StatusCode::INTERNAL_SERVER_ERROR),
            ..Default::default()
        },
        RunConfig::default(),
    )
    .await;

    assert!(summary.is_aborted());
    assert_eq!(summary.games_played(), 0);
    assert_eq!(fixture.games_created(), 0);
}

#[tokio::test]
async fn test_empty_moves_end_every_game_early() {
    let (fixture, summary) = run(
        FixtureBehavior {
            moves: Vec::new(),
            ..Default::default()
        },
        RunConfig {
            games: 4,
            ..Default::default()
        },
    )
    .await;

    assert_eq!(summary.games_played(), 4);
    assert!(summary.records.iter().all(|r| matches!(r.end, GameEnd::NoLegalMoves)));
    assert!(fixture.actions_for("1").is_empty());
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() {
    let behavior = FixtureBehavior {
        moves: (0..8).map(|i| serde_json::json!(i)).collect(),
        decide_after: Some(6),
        ..Default::default()
    };
    let shape = RunConfig {
        games: 1,
        max_moves: 100,
        seed: Some(99),
    };

    let (first, _) = run(behavior.clone(), shape.clone()).await;
    let (second, _) = run(behavior, shape).await;

    assert_eq!(first.actions_for("1"), second.actions_for("1"));
    assert_eq!(first.actions_for("1").len(), 6);
}
