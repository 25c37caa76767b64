use anyhow::Result;
use random_player::{GameRunner, HttpGameServer, PlayerConfig, RunSummary};

pub struct PlayerApp {
    runner: GameRunner<HttpGameServer>,
    config: PlayerConfig,
}

impl PlayerApp {
    pub fn new(config: PlayerConfig) -> Result<Self> {
        let server = HttpGameServer::new(&config.server)?;
        let runner = GameRunner::from_config(server, &config.run);

        Ok(Self { runner, config })
    }

    pub async fn run(&mut self) -> RunSummary {
        tracing::info!(
            base_url = %self.config.server.base_url,
            games = self.config.run.games,
            max_moves = self.config.run.max_moves,
            "Starting random play"
        );

        self.runner.play_many_games(self.config.run.games).await
    }
}
