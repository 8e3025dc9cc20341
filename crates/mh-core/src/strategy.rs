use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// How the final decision of a round is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// The player picks the final door by hand.
    #[default]
    Manual,
    /// The first pick is kept automatically.
    AlwaysStay,
    /// The player automatically switches to the other closed door.
    AlwaysSwitch,
}

impl Strategy {
    /// All strategies in selector order.
    pub const ALL: [Strategy; 3] = [
        Strategy::Manual,
        Strategy::AlwaysStay,
        Strategy::AlwaysSwitch,
    ];

    /// The decision an automatic strategy makes right after the reveal, or
    /// `None` for manual play.
    pub fn auto_decision(self) -> Option<Decision> {
        match self {
            Self::Manual => None,
            Self::AlwaysStay => Some(Decision::Stay),
            Self::AlwaysSwitch => Some(Decision::Switch),
        }
    }

    /// Human-readable label used by the selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Choose manually",
            Self::AlwaysStay => "Always stay",
            Self::AlwaysSwitch => "Always switch",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The next strategy in selector order (wrapping).
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The previous strategy in selector order (wrapping).
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" | "choose" => Ok(Self::Manual),
            "stay" | "always-stay" => Ok(Self::AlwaysStay),
            "switch" | "always-switch" => Ok(Self::AlwaysSwitch),
            other => Err(GameError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::AlwaysStay => write!(f, "stay"),
            Self::AlwaysSwitch => write!(f, "switch"),
        }
    }
}

/// Classification of a final choice relative to the first pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The final door is the first pick.
    Stay,
    /// The final door differs from the first pick.
    Switch,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stay => write!(f, "stay"),
            Self::Switch => write!(f, "switch"),
        }
    }
}
