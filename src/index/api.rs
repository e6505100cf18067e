//! Index API
//!
//! Public surface of the index writer.

pub use crate::index::category::{parse_categories, Category};
pub use crate::index::cleanup::CleanupManager;
pub use crate::index::error::{IndexError, IndexResult};
pub use crate::index::materializer::{relative_target, LinkCounts, LinkOutcome, Materializer};
pub use crate::index::orchestrator::{IndexOrchestrator, RunOptions, TypeReport};
