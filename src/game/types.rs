//! Wire types exchanged with the game server

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use crate::error::ClientError;

/// Winner label the server uses while a game is still running
pub const UNDECIDED: &str = "Undecided";

/// Opaque session identifier issued by `POST /new_game`
///
/// The server may hand out a plain string, a number or a structured token.
/// It is kept verbatim and only rendered when building request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Value);

impl GameId {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Path segment form: strings as-is, anything else as compact JSON
    pub fn to_path_segment(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_segment())
    }
}

/// One legal move, passed back to the server untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(Value);

impl Action {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome indicator carried by every observation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The game continues
    Undecided,
    /// Terminal outcome label as reported by the server
    Decided(String),
}

impl Winner {
    pub fn is_decided(&self) -> bool {
        matches!(self, Winner::Decided(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Winner::Undecided => UNDECIDED,
            Winner::Decided(label) => label,
        }
    }
}

impl From<&str> for Winner {
    fn from(label: &str) -> Self {
        if label == UNDECIDED {
            Winner::Undecided
        } else {
            Winner::Decided(label.to_string())
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Winner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Winner::from(label.as_str()))
    }
}

/// Server response to a performed action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub winner: Winner,
    /// Everything else the server sent (board, turn, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Observation {
    pub fn undecided() -> Self {
        Self {
            winner: Winner::Undecided,
            extra: Map::new(),
        }
    }

    pub fn decided(label: &str) -> Self {
        Self {
            winner: Winner::from(label),
            extra: Map::new(),
        }
    }

    /// Validate a raw response body into an observation
    ///
    /// The body must be a JSON object whose `winner` is a string.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        let mut extra = match value {
            Value::Object(map) => map,
            other => {
                return Err(ClientError::MalformedObservation {
                    message: format!("expected a JSON object, got {}", other),
                })
            }
        };

        let winner = match extra.remove("winner") {
            Some(Value::String(label)) => Winner::from(label.as_str()),
            Some(other) => {
                return Err(ClientError::MalformedObservation {
                    message: format!("'winner' must be a string, got {}", other),
                })
            }
            None => {
                return Err(ClientError::MalformedObservation {
                    message: "missing 'winner' field".to_string(),
                })
            }
        };

        Ok(Self { winner, extra })
    }
}

impl TryFrom<Value> for Observation {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Observation::from_value(value)
    }
}
