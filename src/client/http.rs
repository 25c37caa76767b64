//! HTTP+JSON game server client

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::config::ServerConfig;
use crate::error::{ClientError, ClientResult};
use crate::game::{Action, GameId, Observation};
use super::GameServer;

const NEW_GAME: &str = "new_game";
const LEGAL_MOVES: &str = "legal_moves";
const PERFORM_ACTION: &str = "perform_action";

/// Client for a game server reachable over HTTP
#[derive(Debug, Clone)]
pub struct HttpGameServer {
    http: Client,
    base_url: Url,
}

impl HttpGameServer {
    /// Build a client from explicit server configuration
    pub fn new(config: &ServerConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ClientError::Configuration {
            message: format!("Invalid base URL '{}': {}", config.base_url, e),
            field: "server.base_url".to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration {
                message: format!("Base URL '{}' cannot carry a path", base_url),
                field: "server.base_url".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| ClientError::Configuration {
            message: format!("Failed to build HTTP client: {}", e),
            field: "server".to_string(),
        })?;

        Ok(Self { http, base_url })
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ClientError::Configuration {
                message: format!("Base URL '{}' cannot carry a path", self.base_url),
                field: "server.base_url".to_string(),
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Turn a response into `T`, treating anything but 200 as a rejection
    async fn read_json<T: DeserializeOwned>(operation: &str, response: Response) -> ClientResult<T> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(ClientError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(operation, e))?;

        serde_json::from_slice(&bytes).map_err(|e| ClientError::decode(operation, e))
    }
}

#[async_trait]
impl GameServer for HttpGameServer {
    async fn start_new_game(&self) -> ClientResult<GameId> {
        let url = self.endpoint(&[NEW_GAME])?;
        tracing::debug!(%url, "Requesting new game");

        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|e| ClientError::transport("start_new_game", e))?;

        Self::read_json("start_new_game", response).await
    }

    async fn get_legal_moves(&self, game_id: &GameId) -> ClientResult<Vec<Action>> {
        let segment = game_id.to_path_segment();
        let url = self.endpoint(&[LEGAL_MOVES, &segment])?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::transport("get_legal_moves", e))?;

        let moves: Vec<Action> = Self::read_json("get_legal_moves", response).await?;
        tracing::trace!(game_id = %game_id, count = moves.len(), "Fetched legal moves");
        Ok(moves)
    }

    async fn perform_action(&self, game_id: &GameId, action: &Action) -> ClientResult<Observation> {
        let segment = game_id.to_path_segment();
        let url = self.endpoint(&[PERFORM_ACTION, &segment])?;

        let response = self
            .http
            .post(url)
            .json(action)
            .send()
            .await
            .map_err(|e| ClientError::transport("perform_action", e))?;

        let raw: Value = Self::read_json("perform_action", response).await?;
        Observation::try_from(raw)
    }
}
