//! The bounded tilt score.
//!
//! Tilt runs from -200 (absolute calm) to 200 (apocalypse). Wins pull it
//! down by a small random amount, losses push it up by a larger one. The
//! score saturates at both ends.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::band::MoodBand;
use crate::outcome::Outcome;

/// A tilt score clamped to `TiltScore::MIN..=TiltScore::MAX`.
///
/// Serialized as a bare integer; deserialized values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct TiltScore {
    value: i32,
}

impl TiltScore {
    /// Lowest possible tilt.
    pub const MIN: i32 = -200;
    /// Highest possible tilt.
    pub const MAX: i32 = 200;

    /// Create a new score, clamped to the valid range.
    pub fn new(value: i32) -> Self {
        Self {
            value: value.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The mood band the score currently falls in.
    pub fn band(&self) -> &'static MoodBand {
        MoodBand::for_score(self)
    }

    /// Apply a win with a random delta in 1..=5. Returns the new value.
    pub fn apply_win<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        self.apply(Outcome::Win, rng)
    }

    /// Apply a loss with a random delta in 2..=10. Returns the new value.
    pub fn apply_lose<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        self.apply(Outcome::Lose, rng)
    }

    /// Draw a delta for `outcome` and apply it. Returns the new value.
    pub fn apply<R: Rng + ?Sized>(&mut self, outcome: Outcome, rng: &mut R) -> i32 {
        let delta = rng.random_range(outcome.delta_range());
        self.apply_delta(outcome, delta)
    }

    /// Apply an explicit, non-negative delta in the direction of `outcome`.
    ///
    /// Wins subtract, losses add. The result saturates at the bounds.
    pub fn apply_delta(&mut self, outcome: Outcome, delta: i32) -> i32 {
        let delta = delta.max(0);
        self.value = match outcome {
            Outcome::Win => self.value.saturating_sub(delta).max(Self::MIN),
            Outcome::Lose => self.value.saturating_add(delta).min(Self::MAX),
        };
        self.value
    }

    /// Fraction of the scale that is filled (0.0 at MIN, 1.0 at MAX).
    pub fn progress(&self) -> f64 {
        f64::from(self.value - Self::MIN) / f64::from(Self::MAX - Self::MIN)
    }
}

impl Default for TiltScore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i32> for TiltScore {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<TiltScore> for i32 {
    fn from(score: TiltScore) -> Self {
        score.value
    }
}

impl std::fmt::Display for TiltScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
