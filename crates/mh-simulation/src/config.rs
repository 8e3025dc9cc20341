use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Rounds per strategy in a default batch.
pub const DEFAULT_BATCH_SIZE: u64 = 100;

/// How the two strategies are sampled in each iteration of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialMode {
    /// Stay and switch each play their own freshly drawn round.
    #[default]
    Independent,
    /// One round is drawn and scored under both strategies.
    Paired,
}

impl FromStr for TrialMode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "paired" => Ok(Self::Paired),
            other => Err(SimError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for TrialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Independent => write!(f, "independent"),
            Self::Paired => write!(f, "paired"),
        }
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Rounds played per strategy.
    pub trials: u64,
    /// Sampling mode.
    pub mode: TrialMode,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_BATCH_SIZE,
            mode: TrialMode::default(),
        }
    }
}

impl BatchConfig {
    /// Set the number of rounds per strategy.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Set the sampling mode.
    pub fn with_mode(mut self, mode: TrialMode) -> Self {
        self.mode = mode;
        self
    }
}
