//! Game client loop: play sessions against a server until they end

use std::fmt;
use std::time::{Duration, Instant};
use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;
use crate::client::GameServer;
use crate::config::RunConfig;
use crate::error::{ClientError, ClientResult};
use super::policy::{MovePolicy, RandomPolicy};
use super::summary::RunSummary;
use super::types::GameId;

/// Why a single game stopped
#[derive(Debug, Clone)]
pub enum GameEnd {
    /// The server reported a decided winner
    Winner(String),
    /// The move cap was hit while the game was still undecided
    MoveCapReached,
    /// The server returned an empty legal-move list
    NoLegalMoves,
    /// Fetching legal moves failed
    LegalMovesFailed(ClientError),
    /// Submitting the chosen action failed or returned a malformed observation
    ActionFailed(ClientError),
}

impl GameEnd {
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameEnd::Winner(label) => Some(label),
            _ => None,
        }
    }

    /// Ended before a winner or the move cap
    pub fn is_early(&self) -> bool {
        matches!(
            self,
            GameEnd::NoLegalMoves | GameEnd::LegalMovesFailed(_) | GameEnd::ActionFailed(_)
        )
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            GameEnd::LegalMovesFailed(err) | GameEnd::ActionFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnd::Winner(label) => write!(f, "winner: {}", label),
            GameEnd::MoveCapReached => write!(f, "move cap reached"),
            GameEnd::NoLegalMoves => write!(f, "no legal moves"),
            GameEnd::LegalMovesFailed(err) => write!(f, "legal moves failed: {}", err),
            GameEnd::ActionFailed(err) => write!(f, "action failed: {}", err),
        }
    }
}

/// Result of one play-through
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// 1-based position of the game within its run
    pub game_number: u32,
    pub game_id: GameId,
    pub end: GameEnd,
    /// Actions successfully performed, including a deciding one
    pub moves: u32,
    pub elapsed: Duration,
}

/// Drives games against a server, choosing moves with a policy
pub struct GameRunner<S, P = RandomPolicy> {
    server: S,
    policy: P,
    max_moves: u32,
}

impl<S: GameServer> GameRunner<S, RandomPolicy> {
    /// Random-play runner honouring the configured move cap and seed
    pub fn from_config(server: S, config: &RunConfig) -> Self {
        Self::new(server, RandomPolicy::from_seed(config.seed), config.max_moves)
    }
}

impl<S: GameServer, P: MovePolicy> GameRunner<S, P> {
    pub fn new(server: S, policy: P, max_moves: u32) -> Self {
        Self {
            server,
            policy,
            max_moves,
        }
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    /// Play a single game from creation to its end
    ///
    /// Only a failure to create the session is returned as an error; every
    /// failure after that ends the game and is recorded in [`GameEnd`].
    pub async fn play_one_game(&mut self) -> ClientResult<GameRecord> {
        self.play_game(1).await
    }

    async fn play_game(&mut self, game_number: u32) -> ClientResult<GameRecord> {
        let started = Instant::now();

        let game_id = self.server.start_new_game().await?;
        tracing::info!(game_id = %game_id, "Started new game");

        let mut moves = 0;
        let end = loop {
            if moves >= self.max_moves {
                tracing::info!(moves, "Move cap reached, ending game");
                break GameEnd::MoveCapReached;
            }

            let legal = match self.server.get_legal_moves(&game_id).await {
                Ok(legal) => legal,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to get legal moves, ending game");
                    break GameEnd::LegalMovesFailed(err);
                }
            };

            let action = match self.policy.choose(&legal) {
                Some(action) => action,
                None => {
                    tracing::info!("No legal moves available, ending game");
                    break GameEnd::NoLegalMoves;
                }
            };

            let observation = match self.server.perform_action(&game_id, &action).await {
                Ok(observation) => observation,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to perform action, ending game");
                    break GameEnd::ActionFailed(err);
                }
            };
            moves += 1;

            if observation.winner.is_decided() {
                let end = GameEnd::Winner(observation.winner.to_string());
                tracing::info!(moves, "{}", end);
                break end;
            }

            tracing::trace!(action = %action, moves, "Performed action");
        };

        Ok(GameRecord {
            game_number,
            game_id,
            end,
            moves,
            elapsed: started.elapsed(),
        })
    }

    /// Play `games` independent games, stopping early only if a game cannot be started
    pub async fn play_many_games(&mut self, games: u32) -> RunSummary {
        let mut summary = RunSummary::new(Uuid::new_v4(), Utc::now(), games);
        let run_start = Instant::now();

        tracing::info!(
            run_id = %summary.run_id,
            games,
            max_moves = self.max_moves,
            policy = self.policy.name(),
            "Starting run"
        );

        for game_number in 1..=games {
            let span = tracing::info_span!("game", run_id = %summary.run_id, number = game_number);

            match self.play_game(game_number).instrument(span).await {
                Ok(record) => summary.records.push(record),
                Err(err) => {
                    tracing::error!(error = %err, game_number, "Failed to start a new game, aborting run");
                    summary.aborted = Some(err);
                    break;
                }
            }
        }

        summary.elapsed = run_start.elapsed();
        summary
    }
}
