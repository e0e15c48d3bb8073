//! Configuration for a tilt session.

use crate::phrase::{PhraseSource, RecencyHistory};
use crate::score::TiltScore;

/// Name used when the player leaves theirs blank.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Configuration for a tilt session.
#[derive(Debug, Clone)]
pub struct TiltConfig {
    /// RNG seed for reproducible deltas and phrase picks. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Initial tilt score (-200 to 200).
    pub start_score: i32,
    /// Name substituted into phrase templates.
    pub player_name: String,
    /// How many recent phrases to avoid per outcome kind.
    pub history_capacity: usize,
    /// Phrase source for wins.
    pub win_source: PhraseSource,
    /// Phrase source for losses.
    pub lose_source: PhraseSource,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_score: 0,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            history_capacity: RecencyHistory::DEFAULT_CAPACITY,
            win_source: PhraseSource::from("win_phrases.txt"),
            lose_source: PhraseSource::from("lose_phrases.txt"),
        }
    }
}

impl TiltConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting score (clamped to -200..=200).
    pub fn with_start_score(mut self, score: i32) -> Self {
        self.start_score = TiltScore::new(score).value();
        self
    }

    /// Set the player name. Blank names fall back to the default.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.player_name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }

    /// Set the recency history capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the win phrase source.
    pub fn with_win_source(mut self, source: impl Into<PhraseSource>) -> Self {
        self.win_source = source.into();
        self
    }

    /// Set the lose phrase source.
    pub fn with_lose_source(mut self, source: impl Into<PhraseSource>) -> Self {
        self.lose_source = source.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config() {
        let cfg = TiltConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.start_score, 0);
        assert_eq!(cfg.player_name, "Player");
        assert_eq!(cfg.history_capacity, 5);
        assert_eq!(cfg.win_source, PhraseSource::from("win_phrases.txt"));
        assert_eq!(cfg.lose_source, PhraseSource::from("lose_phrases.txt"));
    }

    #[test]
    fn builder_methods() {
        let cfg = TiltConfig::default()
            .with_seed(123)
            .with_start_score(-40)
            .with_player_name("Alex")
            .with_history_capacity(2)
            .with_win_source("w.txt")
            .with_lose_source("l.txt");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.start_score, -40);
        assert_eq!(cfg.player_name, "Alex");
        assert_eq!(cfg.history_capacity, 2);
        assert_eq!(cfg.win_source, PhraseSource::File(PathBuf::from("w.txt")));
        assert_eq!(cfg.lose_source, PhraseSource::File(PathBuf::from("l.txt")));
    }

    #[test]
    fn inline_sources() {
        let cfg = TiltConfig::default().with_win_source(PhraseSource::inline("GG"));
        assert_eq!(cfg.win_source, PhraseSource::Inline("GG".to_string()));
    }

    #[test]
    fn start_score_clamped() {
        assert_eq!(TiltConfig::default().with_start_score(-999).start_score, -200);
        assert_eq!(TiltConfig::default().with_start_score(999).start_score, 200);
    }

    #[test]
    fn blank_name_uses_default() {
        assert_eq!(TiltConfig::default().with_player_name("   ").player_name, "Player");
        assert_eq!(TiltConfig::default().with_player_name(" Kim ").player_name, "Kim");
    }
}
