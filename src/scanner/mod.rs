//! Release discovery
//!
//! Walks scan roots, groups audio files into releases using the configured
//! release depth and turns each distinct release into a [`ReleaseInfo`].
//!
//! ## Pieces
//!
//! - **AudioFileWalker**: lazy, restartable producer of candidate audio files
//! - **resolve_release**: maps a file to the directory that bounds its release
//! - **TagReader**: metadata capability, symphonia-backed in production
//! - **ReleaseScanner**: deduplicates releases per scan and tracks counters
//!
//! Nothing in here is fatal: missing roots, unreadable entries and files
//! without tags are logged, counted and skipped.

pub mod api;
pub mod boundary;
pub mod facets;
pub mod manager;
pub mod tags;
pub mod types;
pub mod walker;

pub use manager::{ReleaseScanner, ReleaseStream};
pub use tags::{SymphoniaTagReader, TagReader};
pub use types::{MediaType, ReleaseInfo, ScanStats, TrackTags};

#[cfg(test)]
pub(crate) mod tests;
