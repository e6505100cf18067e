//! Symlink index
//!
//! Materializes discovered releases as
//! `index_root/<type>/<category>/<facet>/<release_name>` symlinks and cleans
//! category subtrees on request. Any filesystem write failure here is fatal.

pub mod api;
pub mod category;
pub mod cleanup;
pub mod error;
pub mod materializer;
pub mod orchestrator;

pub use category::Category;
pub use error::{IndexError, IndexResult};
pub use orchestrator::{IndexOrchestrator, RunOptions, TypeReport};

#[cfg(test)]
mod tests;
