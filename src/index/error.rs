//! Index Error Types
//!
//! Every variant is fatal for the whole run: failing to write the index tree
//! points at a systemic filesystem problem rather than a bad release.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Cannot create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Cannot remove existing entry {}: {source}", path.display())]
    RemoveEntry { path: PathBuf, source: io::Error },

    #[error("Index category {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Cannot read index directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("Cannot create symlink {} -> {}: {source}", link.display(), target.display())]
    CreateLink {
        link: PathBuf,
        target: PathBuf,
        source: io::Error,
    },
}

impl crate::core::error_handling::ContextualError for IndexError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<String> {
        None
    }
}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;
