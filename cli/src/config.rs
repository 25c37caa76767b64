use random_player::{ClientResult, PlayerConfig};
use std::path::Path;

/// Values given on the command line; `None` keeps the file or default value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub games: Option<u32>,
    pub max_moves: Option<u32>,
    pub seed: Option<u64>,
    pub timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut PlayerConfig) {
        if let Some(base_url) = self.base_url {
            config.server.base_url = base_url;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.server.request_timeout_secs = timeout_secs;
        }
        if let Some(games) = self.games {
            config.run.games = games;
        }
        if let Some(max_moves) = self.max_moves {
            config.run.max_moves = max_moves;
        }
        if self.seed.is_some() {
            config.run.seed = self.seed;
        }
    }
}

/// Defaults, then the config file, then command line flags
pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> ClientResult<PlayerConfig> {
    let mut config = match file {
        Some(path) => PlayerConfig::from_file(path)?,
        None => PlayerConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
