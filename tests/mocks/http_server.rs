//! In-process HTTP game server speaking the same wire format as the real one

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// How the fixture behaves
#[derive(Debug, Clone)]
pub struct FixtureBehavior {
    /// Moves offered in every position
    pub moves: Vec<Value>,
    /// Games are won on this action number; `None` never decides
    pub decide_after: Option<u32>,
    pub winner: String,
    /// Respond to `/new_game` with this status instead of creating a game
    pub new_game_status: Option<StatusCode>,
    /// Observations omit the `winner` field
    pub malformed_observations: bool,
    /// Game ids are issued as numbers instead of strings
    pub numeric_ids: bool,
    /// Hold every `/legal_moves` response for this long
    pub stall: Option<Duration>,
}

impl Default for FixtureBehavior {
    fn default() -> Self {
        Self {
            moves: vec![json!("A"), json!("B")],
            decide_after: Some(3),
            winner: "WinBlack".to_string(),
            new_game_status: None,
            malformed_observations: false,
            numeric_ids: false,
            stall: None,
        }
    }
}

#[derive(Default)]
struct FixtureGames {
    next_id: u64,
    /// Actions performed per game
    moves: HashMap<String, Vec<Value>>,
}

struct FixtureState {
    behavior: FixtureBehavior,
    games: Mutex<FixtureGames>,
}

/// Running fixture server; shuts down with the test runtime
pub struct TestGameServer {
    addr: SocketAddr,
    state: Arc<FixtureState>,
}

impl TestGameServer {
    pub async fn start(behavior: FixtureBehavior) -> Self {
        let state = Arc::new(FixtureState {
            behavior,
            games: Mutex::new(FixtureGames::default()),
        });

        let app = Router::new()
            .route("/new_game", post(new_game))
            .route("/legal_moves/:game_id", get(legal_moves))
            .route("/perform_action/:game_id", post(perform_action))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn games_created(&self) -> usize {
        self.state.games.lock().unwrap().moves.len()
    }

    /// Actions the server received for `game_id`, in order
    pub fn actions_for(&self, game_id: &str) -> Vec<Value> {
        self.state
            .games
            .lock()
            .unwrap()
            .moves
            .get(game_id)
            .cloned()
            .unwrap_or_default()
    }
}

type HandlerResult = Result<Json<Value>, (StatusCode, String)>;

async fn new_game(State(state): State<Arc<FixtureState>>) -> HandlerResult {
    if let Some(status) = state.behavior.new_game_status {
        return Err((status, "Failed to start a new game".to_string()));
    }

    let mut games = state.games.lock().unwrap();
    games.next_id += 1;
    let id = games.next_id;
    games.moves.insert(id.to_string(), Vec::new());

    if state.behavior.numeric_ids {
        Ok(Json(json!(id)))
    } else {
        Ok(Json(json!(id.to_string())))
    }
}

async fn legal_moves(
    State(state): State<Arc<FixtureState>>,
    Path(game_id): Path<String>,
) -> HandlerResult {
    if let Some(stall) = state.behavior.stall {
        tokio::time::sleep(stall).await;
    }

    let games = state.games.lock().unwrap();
    if !games.moves.contains_key(&game_id) {
        return Err((StatusCode::NOT_FOUND, format!("Game {} not found", game_id)));
    }

    Ok(Json(Value::Array(state.behavior.moves.clone())))
}

async fn perform_action(
    State(state): State<Arc<FixtureState>>,
    Path(game_id): Path<String>,
    Json(action): Json<Value>,
) -> HandlerResult {
    let mut games = state.games.lock().unwrap();
    let performed = match games.moves.get_mut(&game_id) {
        Some(performed) => performed,
        None => return Err((StatusCode::NOT_FOUND, format!("Game {} not found", game_id))),
    };

    if !state.behavior.moves.contains(&action) {
        return Err((StatusCode::BAD_REQUEST, format!("Illegal move {}", action)));
    }

    performed.push(action);
    let count = performed.len() as u32;

    if state.behavior.malformed_observations {
        return Ok(Json(json!({ "board": [] })));
    }

    let winner = match state.behavior.decide_after {
        Some(n) if count >= n => state.behavior.winner.clone(),
        _ => "Undecided".to_string(),
    };

    Ok(Json(json!({ "winner": winner, "board": [], "moves_played": count })))
}
