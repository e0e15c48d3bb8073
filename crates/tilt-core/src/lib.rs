//! Tilt tracking core.
//!
//! Keeps a bounded tilt score for a single player, maps it onto a fixed set
//! of mood bands, and picks congratulating or consoling phrases after each
//! win or loss without repeating recently shown ones.

pub mod band;
pub mod config;
pub mod error;
pub mod outcome;
pub mod phrase;
pub mod score;
pub mod session;

pub use band::MoodBand;
pub use config::TiltConfig;
pub use error::{TiltError, TiltResult};
pub use outcome::Outcome;
pub use phrase::{PhrasePool, PhraseSelector, PhraseSource, RecencyHistory};
pub use score::TiltScore;
pub use session::{Command, Response, TiltSession, TiltSnapshot};
