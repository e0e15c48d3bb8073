//! Phrase template pools and their text format.

use std::path::Path;

use crate::error::{TiltError, TiltResult};
use crate::outcome::Outcome;

/// Token replaced with the player's name.
pub const PLACEHOLDER: &str = "{username}";

/// Templates used when a win source yields nothing.
pub const DEFAULT_WIN_PHRASES: &[&str] = &["Keep it up, {username}!", "Great game, {username}!"];

/// Templates used when a lose source yields nothing.
pub const DEFAULT_LOSE_PHRASES: &[&str] = &[
    "{username}, time for the secret weapon!",
    "{username}, the next game will be better!",
];

/// Replace every placeholder in `template` with `player_name`.
pub fn render(template: &str, player_name: &str) -> String {
    template.replace(PLACEHOLDER, player_name)
}

/// An ordered, immutable list of phrase templates for one outcome kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    /// Build a pool from templates, keeping their order.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a phrase source: one template per line, trimmed, blank lines skipped.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Read and parse a phrase source file.
    pub fn from_file(path: &Path) -> TiltResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TiltError::PhraseSource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// The built-in templates for an outcome kind.
    pub fn defaults(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::new(DEFAULT_WIN_PHRASES.iter().copied()),
            Outcome::Lose => Self::new(DEFAULT_LOSE_PHRASES.iter().copied()),
        }
    }

    /// This pool, or the built-in templates for `outcome` if it is empty.
    pub fn or_defaults(self, outcome: Outcome) -> Self {
        if self.is_empty() {
            Self::defaults(outcome)
        } else {
            self
        }
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if the pool holds no templates.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Iterate over the templates in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}
