//! Error types for the random-play game client

use thiserror::Error;

/// Main error type for talking to a game server
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Transport error during {operation}: {message}")]
    Transport {
        operation: String,
        message: String,
    },

    #[error("Server rejected {operation} with status {status}: {body}")]
    Status {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode {operation} response: {message}")]
    Decode {
        operation: String,
        message: String,
    },

    #[error("Malformed observation: {message}")]
    MalformedObservation { message: String },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: String,
    },
}

impl ClientError {
    /// Wrap a reqwest failure that happened before a status was available
    pub fn transport(operation: &str, err: reqwest::Error) -> Self {
        ClientError::Transport {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    /// Wrap a body that did not match the expected schema
    pub fn decode(operation: &str, err: impl std::fmt::Display) -> Self {
        ClientError::Decode {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    /// Name of the server operation that failed, if any
    pub fn operation(&self) -> Option<&str> {
        match self {
            ClientError::Transport { operation, .. }
            | ClientError::Status { operation, .. }
            | ClientError::Decode { operation, .. } => Some(operation),
            ClientError::MalformedObservation { .. } => Some("perform_action"),
            ClientError::Configuration { .. } => None,
        }
    }

    /// True for failures reported by the server itself rather than the network
    pub fn is_server_rejection(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode {
            operation: "json".to_string(),
            message: err.to_string(),
        }
    }
}

/// Type alias for the main result type used throughout the library
pub type ClientResult<T> = Result<T, ClientError>;

/// Logging configuration and initialization
pub mod logging {
    use tracing::Level;
    use tracing_subscriber::filter::ParseError;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    use std::env;
    use std::str::FromStr;

    /// How log lines are rendered on stdout
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LogFormat {
        Human,
        Json,
    }

    impl FromStr for LogFormat {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_ascii_lowercase().as_str() {
                "human" | "text" => Ok(LogFormat::Human),
                "json" => Ok(LogFormat::Json),
                other => Err(format!("unknown log format '{}'", other)),
            }
        }
    }

    /// Level and format for the run's log output
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        pub level: Level,
        pub format: LogFormat,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                format: LogFormat::Human,
            }
        }
    }

    impl LoggingConfig {
        /// Read `RANDOM_PLAYER_LOG_LEVEL` and `RANDOM_PLAYER_LOG_FORMAT`, falling back to defaults
        pub fn from_env() -> Self {
            let defaults = Self::default();

            let level = env::var("RANDOM_PLAYER_LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse::<Level>().ok())
                .unwrap_or(defaults.level);

            let format = env::var("RANDOM_PLAYER_LOG_FORMAT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.format);

            Self { level, format }
        }

        /// Filter at the configured level; `RUST_LOG` directives still apply.
        /// HTTP stack internals stay at info.
        pub fn filter(&self) -> Result<EnvFilter, ParseError> {
            Ok(EnvFilter::builder()
                .with_default_directive(self.level.into())
                .from_env_lossy()
                .add_directive("hyper=info".parse()?)
                .add_directive("reqwest=info".parse()?))
        }
    }

    /// Install the global subscriber writing to stdout
    pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let registry = tracing_subscriber::registry().with(config.filter()?);

        match config.format {
            LogFormat::Human => registry
                .with(fmt::layer().compact().with_target(false))
                .try_init()?,
            LogFormat::Json => registry
                .with(fmt::layer().json().with_current_span(true).with_span_list(false))
                .try_init()?,
        }

        Ok(())
    }
}
