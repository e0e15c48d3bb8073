//! Where a phrase pool comes from.

use std::path::{Path, PathBuf};

use super::pool::PhrasePool;
use crate::error::TiltResult;

/// A phrase source: a file on disk or text bundled with the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseSource {
    /// Read the templates from a file when the session starts.
    File(PathBuf),
    /// Templates already in memory, in the same line format as a file.
    Inline(String),
}

impl PhraseSource {
    /// A source backed by text in the phrase file format.
    pub fn inline(text: impl Into<String>) -> Self {
        Self::Inline(text.into())
    }

    /// Parse the templates. Only file sources can fail.
    pub fn load(&self) -> TiltResult<PhrasePool> {
        match self {
            Self::File(path) => PhrasePool::from_file(path),
            Self::Inline(text) => Ok(PhrasePool::parse(text)),
        }
    }
}

impl From<PathBuf> for PhraseSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for PhraseSource {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<&str> for PhraseSource {
    fn from(path: &str) -> Self {
        Self::File(PathBuf::from(path))
    }
}

impl std::fmt::Display for PhraseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline(_) => write!(f, "<bundled>"),
        }
    }
}
