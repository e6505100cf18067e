//! Scanner API
//!
//! Public surface of the scanner, kept in one place so the index and app
//! modules do not reach into scanner internals.

pub use crate::scanner::boundary::resolve_release;
pub use crate::scanner::facets::{derive_facets, NameFacets};
pub use crate::scanner::manager::{ReleaseScanner, ReleaseStream};
pub use crate::scanner::tags::{SymphoniaTagReader, TagReader};
pub use crate::scanner::types::{MediaType, ReleaseInfo, ScanStats, TrackTags};
pub use crate::scanner::walker::AudioFileWalker;
