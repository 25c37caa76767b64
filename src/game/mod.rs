//! Game session types, move selection and the play loop

pub mod types;
pub mod policy;
pub mod runner;
pub mod summary;

// Re-export core game types
pub use types::{Action, GameId, Observation, Winner, UNDECIDED};
pub use policy::{MovePolicy, RandomPolicy};
pub use runner::{GameEnd, GameRecord, GameRunner};
pub use summary::{MoveStats, RunSummary};
