//! Configuration for a game.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::strategy::Strategy;

/// Configuration for a [`crate::Game`].
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible games. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Strategy the game starts with.
    pub strategy: Strategy,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Build the RNG this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
