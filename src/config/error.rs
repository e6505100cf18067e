//! Config Error Types

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot open config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Config error: at least one MUSIC_DIR=... or MP3_DIR=... or FLAC_DIR=... is required")]
    MissingRoots,

    #[error("Config error: INDEX_ROOT=... is required")]
    MissingIndexRoot,
}

impl crate::core::error_handling::ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Result type for config loading
pub type ConfigResult<T> = Result<T, ConfigError>;
