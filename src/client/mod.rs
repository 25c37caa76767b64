//! Game server clients

pub mod http;

use async_trait::async_trait;
use crate::error::ClientResult;
use crate::game::{Action, GameId, Observation};

// Re-export client types
pub use http::HttpGameServer;

/// The three operations a remote game server exposes
///
/// Legality is owned by the server: whatever `get_legal_moves` returns is
/// treated as the complete set of moves for that call.
#[async_trait]
pub trait GameServer: Send + Sync {
    /// Create a new game session
    async fn start_new_game(&self) -> ClientResult<GameId>;

    /// Current legal moves for a session, possibly empty
    async fn get_legal_moves(&self, game_id: &GameId) -> ClientResult<Vec<Action>>;

    /// Submit one move and return the resulting observation
    async fn perform_action(&self, game_id: &GameId, action: &Action) -> ClientResult<Observation>;
}

#[async_trait]
impl<'a, S: GameServer + ?Sized> GameServer for &'a S {
    async fn start_new_game(&self) -> ClientResult<GameId> {
        (**self).start_new_game().await
    }

    async fn get_legal_moves(&self, game_id: &GameId) -> ClientResult<Vec<Action>> {
        (**self).get_legal_moves(game_id).await
    }

    async fn perform_action(&self, game_id: &GameId, action: &Action) -> ClientResult<Observation> {
        (**self).perform_action(game_id, action).await
    }
}
