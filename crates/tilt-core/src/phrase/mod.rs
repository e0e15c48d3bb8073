//! Phrase pools and anti-repeat phrase selection.
//!
//! Each outcome kind has its own pool of templates and its own recency
//! history. Templates may contain a `{username}` placeholder that is
//! replaced with the player's name when a phrase is picked.

pub mod history;
pub mod pool;
pub mod selector;
pub mod source;

pub use history::RecencyHistory;
pub use pool::{PLACEHOLDER, PhrasePool, render};
pub use selector::PhraseSelector;
pub use source::PhraseSource;
