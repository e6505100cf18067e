//! Index Orchestrator
//!
//! Runs every enabled media type in a fixed order (mp3, then flac):
//! optional cleanup, release scan, then one materialization per release.
//! The first fatal error aborts the whole run.

use crate::config::Config;
use crate::index::cleanup::CleanupManager;
use crate::index::error::IndexResult;
use crate::index::materializer::{LinkCounts, Materializer};
use crate::scanner::manager::ReleaseScanner;
use crate::scanner::tags::TagReader;
use crate::scanner::types::{MediaType, ScanStats};
use strum::IntoEnumIterator;

/// Per-run switches supplied on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub dry_run: bool,
    pub force: bool,
    /// `Some` when `--clean`/`--no-clean` was given, overriding `CLEAN_ON_START`
    pub clean: Option<bool>,
}

/// Outcome of indexing one media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReport {
    pub media_type: MediaType,
    pub stats: ScanStats,
    pub links: LinkCounts,
    /// Index entries removed by cleanup (or that would be, in dry run)
    pub cleaned: usize,
}

pub struct IndexOrchestrator<'a> {
    config: &'a Config,
    tag_reader: &'a dyn TagReader,
}

impl<'a> IndexOrchestrator<'a> {
    pub fn new(config: &'a Config, tag_reader: &'a dyn TagReader) -> Self {
        Self { config, tag_reader }
    }

    /// Index every enabled type; returns one report per type that ran
    pub fn run(&self, options: &RunOptions) -> IndexResult<Vec<TypeReport>> {
        let mut reports = Vec::new();
        for media_type in MediaType::iter().filter(|t| self.config.is_enabled(*t)) {
            reports.push(self.run_type(media_type, options)?);
        }
        Ok(reports)
    }

    pub fn run_type(&self, media_type: MediaType, options: &RunOptions) -> IndexResult<TypeReport> {
        let settings = self.config.type_settings(media_type);
        let index_root = self.config.index_root();
        log::info!(
            "[{}] indexing into {}{}",
            media_type,
            index_root.join(media_type.as_ref()).display(),
            if options.dry_run { " (dry run)" } else { "" }
        );

        let cleaned = if options.clean.unwrap_or(self.config.clean_on_start) {
            CleanupManager::new(index_root, options.dry_run).clean(media_type, &settings.categories)?
        } else {
            0
        };

        let scanner = ReleaseScanner::new(
            self.config.scan_roots(media_type),
            media_type,
            settings.release_depth,
            self.config.follow_symlinks,
            self.tag_reader,
        );
        let materializer = Materializer::new(
            index_root,
            media_type,
            self.config.relative_symlinks,
            options.force,
            options.dry_run,
        );

        let mut links = LinkCounts::default();
        let mut releases = scanner.scan();
        for release in releases.by_ref() {
            links.add(materializer.materialize(&release, &settings.categories)?);
        }
        let stats = releases.into_stats();

        log::info!(
            "[{}] scanned files: {}, indexed releases: {}",
            media_type,
            stats.files_seen,
            stats.releases_indexed
        );
        if stats.unreadable_tags > 0 || stats.entries_skipped > 0 {
            log::debug!(
                "[{}] unreadable tags: {}, skipped entries: {}",
                media_type,
                stats.unreadable_tags,
                stats.entries_skipped
            );
        }

        Ok(TypeReport {
            media_type,
            stats,
            links,
            cleaned,
        })
    }
}
