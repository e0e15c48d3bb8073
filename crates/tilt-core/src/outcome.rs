//! Game outcomes that drive the tilt score and phrase selection.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::TiltError;

/// The result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The player won. Tilt goes down.
    Win,
    /// The player lost. Tilt goes up.
    Lose,
}

impl Outcome {
    /// Range the random tilt delta is drawn from for this outcome.
    pub fn delta_range(self) -> RangeInclusive<i32> {
        match self {
            Self::Win => 1..=5,
            Self::Lose => 2..=10,
        }
    }

    /// Literal returned by the phrase selector when it has nothing to pick from.
    pub fn fallback_phrase(self) -> &'static str {
        match self {
            Self::Win => "Win!",
            Self::Lose => "Loss...",
        }
    }

    /// Parse an outcome from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "win" | "w" | "victory" => Some(Self::Win),
            "lose" | "loss" | "l" | "defeat" => Some(Self::Lose),
            _ => None,
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = TiltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| TiltError::InvalidOutcome(s.to_string()))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
        }
    }
}
