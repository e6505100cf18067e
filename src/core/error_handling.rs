//! Generic error handling utilities
//!
//! Provides unified fatal-error reporting that works across the config, index
//! and application error types while keeping each module's error enum local.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (a bad config file) are reported with their own
/// message. System errors (a failed symlink) are reported with the operation
/// context followed by the full error text, which already names the path and
/// the underlying cause.
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`; otherwise it should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the user can act on directly
    fn is_user_actionable(&self) -> bool;

    /// The user-facing message for user-actionable errors
    fn user_message(&self) -> Option<String>;
}

/// Build the single line reported for a fatal error
pub fn fatal_message<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => user_msg,
        _ => format!("{}: {}", operation_context, error),
    }
}

/// Log a fatal error once at error level, with details at debug level
///
/// # Examples
/// ```rust,no_run
/// # use releasedex::core::error_handling::log_error_with_context;
/// # use releasedex::config::ConfigError;
/// let err = ConfigError::MissingIndexRoot;
/// log_error_with_context(&err, "Loading configuration");
/// // Logs: "FATAL: Config error: INDEX_ROOT=... is required"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("FATAL: {}", fatal_message(error, operation_context));

    let mut source = error.source();
    while let Some(cause) = source {
        log::debug!("CAUSED_BY: {}", cause);
        source = cause.source();
    }
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
