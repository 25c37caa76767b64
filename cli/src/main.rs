use anyhow::{anyhow, bail, Result};
use clap::{Parser, ValueEnum};
use random_player::error::logging::{self, LogFormat, LoggingConfig};
use std::path::PathBuf;
use tracing::Level;

mod app;
mod config;

use app::PlayerApp;
use config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "random-player")]
#[command(about = "Play random games against a remote game server")]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the game server
    #[arg(long)]
    base_url: Option<String>,

    /// Number of games to play
    #[arg(short, long)]
    games: Option<u32>,

    /// Move cap per game
    #[arg(short, long)]
    max_moves: Option<u32>,

    /// Seed for move selection (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Per-request timeout in seconds, 0 disables it
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log output format
    #[arg(long)]
    log_format: Option<LogFormatArg>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Human,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Human => LogFormat::Human,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Environment first, flags on top
    let mut log_config = LoggingConfig::from_env();
    if let Some(format) = cli.log_format {
        log_config.format = format.into();
    }
    if cli.verbose {
        log_config.level = Level::DEBUG;
    }
    logging::init_logging(&log_config).map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let overrides = ConfigOverrides {
        base_url: cli.base_url,
        games: cli.games,
        max_moves: cli.max_moves,
        seed: cli.seed,
        timeout_secs: cli.timeout_secs,
    };
    let config = config::resolve(cli.config.as_deref(), overrides)?;

    let mut app = PlayerApp::new(config)?;
    let summary = app.run().await;

    println!("\n{}", summary);

    if let Some(err) = &summary.aborted {
        bail!("Run aborted after {} games: {}", summary.games_played(), err);
    }

    Ok(())
}
