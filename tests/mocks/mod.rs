//! Mock implementations for testing

pub mod http_server;

pub use game_server::{Call, MockGameServer};
pub use http_server::{FixtureBehavior, TestGameServer};
