//! Application Error Types

use crate::config::ConfigError;
use crate::core::error_handling::ContextualError;
use crate::index::IndexError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("Cannot initialize logging: {0}")]
    Logging(String),
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Config(e) => e.is_user_actionable(),
            AppError::Index(e) => e.is_user_actionable(),
            AppError::Logging(_) => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Index(e) => e.user_message(),
            AppError::Logging(_) => Some(self.to_string()),
        }
    }
}

/// Result type for the application layer
pub type AppResult<T> = Result<T, AppError>;
