//! Error types for the tilt core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for tilt operations.
pub type TiltResult<T> = Result<T, TiltError>;

/// Errors that can occur while loading phrases or handling session input.
#[derive(Debug, Error)]
pub enum TiltError {
    /// A phrase source could not be read.
    #[error("cannot read phrase source {}: {source}", path.display())]
    PhraseSource {
        /// Path of the phrase source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An outcome string was neither a win nor a loss.
    #[error("invalid outcome: {0}")]
    InvalidOutcome(String),

    /// Unknown session command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
