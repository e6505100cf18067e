//! Configuration
//!
//! Loads the `KEY=value` config file into a typed [`Config`] and validates it
//! once, before any scanning starts.

pub mod error;
pub mod loader;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{Config, TypeSettings, DEFAULT_RELEASE_DEPTH};
