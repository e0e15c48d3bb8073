//! Bounded FIFO of recently shown phrases.

use std::collections::VecDeque;

/// The last few phrases shown for one outcome kind, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecencyHistory {
    /// Default number of phrases remembered per outcome kind.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Create an empty history holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a shown phrase, evicting the oldest when over capacity.
    pub fn push(&mut self, phrase: impl Into<String>) {
        self.entries.push_back(phrase.into());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Returns true if `phrase` was shown recently.
    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.iter().any(|e| e == phrase)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of remembered phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for RecencyHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
