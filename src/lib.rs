//! random-player - drive a remote game server with uniformly random moves
//!
//! The client owns no game rules. It:
//! - Starts game sessions over HTTP
//! - Asks the server for the legal moves of the current position
//! - Submits one of them, chosen uniformly at random
//! - Stops a game on a decided winner, an empty move list, a failure or the move cap

pub mod client;
pub mod config;
pub mod error;
pub mod game;

// Re-export commonly used types for convenience
pub use error::{ClientError, ClientResult};

// Re-export client interfaces
pub use client::{GameServer, HttpGameServer};

// Re-export game types
pub use game::{
    Action, GameEnd, GameId, GameRecord, GameRunner, MovePolicy, MoveStats, Observation,
    RandomPolicy, RunSummary, Winner,
};

// Re-export configuration interfaces
pub use config::{PlayerConfig, RunConfig, ServerConfig};
