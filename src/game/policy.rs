//! Move selection over a server-provided legal move list

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use super::types::Action;

/// Picks one action out of the legal moves the server returned
pub trait MovePolicy: Send {
    /// Choose an action; `None` only when `legal` is empty
    fn choose(&mut self, legal: &[Action]) -> Option<Action>;

    fn name(&self) -> &str;
}

/// Uniformly random choice among the legal moves
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic policy for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, legal: &[Action]) -> Option<Action> {
        legal.choose(&mut self.rng).cloned()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
