//! Random phrase selection with an anti-repeat window.
//!
//! A pick excludes every template currently in the outcome's recency
//! history. When the history covers the whole pool the history is cleared
//! and the full pool is used again. With a pool no larger than the history
//! capacity this means a reset on every pick once the history is warm.

use rand::Rng;

use super::history::RecencyHistory;
use super::pool::{PhrasePool, render};
use super::source::PhraseSource;
use crate::error::TiltError;
use crate::outcome::Outcome;

/// Picks phrases for wins and losses, avoiding recent repeats.
#[derive(Debug, Clone)]
pub struct PhraseSelector {
    win_pool: PhrasePool,
    lose_pool: PhrasePool,
    win_history: RecencyHistory,
    lose_history: RecencyHistory,
}

impl PhraseSelector {
    /// Create a selector over the given pools as-is.
    ///
    /// Empty pools are kept empty; picking from them yields the outcome's
    /// fallback literal. Use [`PhraseSelector::load`] or
    /// [`PhrasePool::or_defaults`] to get built-in templates instead.
    pub fn new(win_pool: PhrasePool, lose_pool: PhrasePool, history_capacity: usize) -> Self {
        Self {
            win_pool,
            lose_pool,
            win_history: RecencyHistory::new(history_capacity),
            lose_history: RecencyHistory::new(history_capacity),
        }
    }

    /// A selector using only the built-in templates.
    pub fn with_defaults(history_capacity: usize) -> Self {
        Self::new(
            PhrasePool::defaults(Outcome::Win),
            PhrasePool::defaults(Outcome::Lose),
            history_capacity,
        )
    }

    /// Load both pools from their phrase sources.
    ///
    /// A source that cannot be read, or that contains no phrases, is
    /// replaced by the built-in templates. Read failures are returned
    /// alongside the selector so the caller can report them.
    pub fn load(
        win_source: &PhraseSource,
        lose_source: &PhraseSource,
        history_capacity: usize,
    ) -> (Self, Vec<TiltError>) {
        let mut warnings = Vec::new();
        let mut read = |source: &PhraseSource, outcome: Outcome| {
            source
                .load()
                .unwrap_or_else(|e| {
                    warnings.push(e);
                    PhrasePool::default()
                })
                .or_defaults(outcome)
        };
        let win_pool = read(win_source, Outcome::Win);
        let lose_pool = read(lose_source, Outcome::Lose);
        (Self::new(win_pool, lose_pool, history_capacity), warnings)
    }

    /// Pick the next phrase for `outcome` and fill in the player's name.
    pub fn next<R: Rng + ?Sized>(
        &mut self,
        outcome: Outcome,
        player_name: &str,
        rng: &mut R,
    ) -> String {
        let (pool, history) = match outcome {
            Outcome::Win => (&self.win_pool, &mut self.win_history),
            Outcome::Lose => (&self.lose_pool, &mut self.lose_history),
        };

        if pool.is_empty() {
            return outcome.fallback_phrase().to_string();
        }

        let mut candidates: Vec<&str> = pool.iter().filter(|p| !history.contains(p)).collect();
        if candidates.is_empty() {
            candidates = pool.iter().collect();
            history.clear();
        }

        let chosen = candidates[rng.random_range(0..candidates.len())];
        history.push(chosen);
        render(chosen, player_name)
    }

    /// The template pool for an outcome kind.
    pub fn pool(&self, outcome: Outcome) -> &PhrasePool {
        match outcome {
            Outcome::Win => &self.win_pool,
            Outcome::Lose => &self.lose_pool,
        }
    }

    /// The recency history for an outcome kind.
    pub fn history(&self, outcome: Outcome) -> &RecencyHistory {
        match outcome {
            Outcome::Win => &self.win_history,
            Outcome::Lose => &self.lose_history,
        }
    }

    /// Forget recently shown phrases for both outcome kinds.
    pub fn clear_history(&mut self) {
        self.win_history.clear();
        self.lose_history.clear();
    }

    /// Number of win templates.
    pub fn win_count(&self) -> usize {
        self.win_pool.len()
    }

    /// Number of lose templates.
    pub fn lose_count(&self) -> usize {
        self.lose_pool.len()
    }
}

impl Default for PhraseSelector {
    fn default() -> Self {
        Self::with_defaults(RecencyHistory::DEFAULT_CAPACITY)
    }
}
