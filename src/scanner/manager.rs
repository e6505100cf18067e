//! Release Scanner
//!
//! Walks the scan roots of one media type, resolves each matching file to its
//! release directory and yields one [`ReleaseInfo`] per distinct release.
//! Deduplication keys on the canonical release directory, so the set of
//! releases does not depend on traversal order. Within a release the first
//! file with readable tags supplies the facets.

use crate::scanner::boundary::resolve_release;
use crate::scanner::tags::TagReader;
use crate::scanner::types::{MediaType, ReleaseInfo, ScanStats};
use crate::scanner::walker::AudioFileWalker;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Scan parameters for one media type
pub struct ReleaseScanner<'a> {
    roots: &'a [PathBuf],
    media_type: MediaType,
    release_depth: usize,
    follow_symlinks: bool,
    tag_reader: &'a dyn TagReader,
}

impl<'a> ReleaseScanner<'a> {
    pub fn new(
        roots: &'a [PathBuf],
        media_type: MediaType,
        release_depth: usize,
        follow_symlinks: bool,
        tag_reader: &'a dyn TagReader,
    ) -> Self {
        Self {
            roots,
            media_type,
            release_depth: release_depth.max(1),
            follow_symlinks,
            tag_reader,
        }
    }

    /// Start a fresh traversal. Each call owns its own seen-set and counters.
    pub fn scan(&self) -> ReleaseStream<'a> {
        ReleaseStream {
            roots: self.roots.iter(),
            current: None,
            media_type: self.media_type,
            release_depth: self.release_depth,
            follow_symlinks: self.follow_symlinks,
            tag_reader: self.tag_reader,
            seen: HashSet::new(),
            stats: ScanStats::default(),
        }
    }
}

/// Lazy sequence of distinct releases produced by [`ReleaseScanner::scan`]
pub struct ReleaseStream<'a> {
    roots: std::slice::Iter<'a, PathBuf>,
    current: Option<(&'a Path, AudioFileWalker)>,
    media_type: MediaType,
    release_depth: usize,
    follow_symlinks: bool,
    tag_reader: &'a dyn TagReader,
    seen: HashSet<PathBuf>,
    stats: ScanStats,
}

impl<'a> ReleaseStream<'a> {
    /// Counters accumulated so far; final once the stream is exhausted
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn into_stats(self) -> ScanStats {
        self.stats
    }

    fn open_next_root(&mut self) -> bool {
        let Some(root) = self.roots.next() else {
            return false;
        };

        if !root.exists() {
            log::warn!("[{}] scan root does not exist: {}", self.media_type, root.display());
            self.stats.roots_missing += 1;
        } else {
            log::debug!(
                "[{}] scanning {} (release depth {})",
                self.media_type,
                root.display(),
                self.release_depth
            );
            let walker =
                AudioFileWalker::new(root, self.media_type.extension(), self.follow_symlinks);
            self.current = Some((root.as_path(), walker));
        }
        true
    }

    fn process_file(&mut self, root: &Path, file: &Path) -> Option<ReleaseInfo> {
        self.stats.files_seen += 1;

        let release_dir = resolve_release(root, file, self.release_depth);
        let key = dedup_key(&release_dir);
        if self.seen.contains(&key) {
            log::trace!("{} belongs to already indexed release {}", file.display(), key.display());
            return None;
        }

        let Some(tags) = self.tag_reader.read_tags(file) else {
            self.stats.unreadable_tags += 1;
            log::debug!("Skipping {}: no readable tags", file.display());
            return None;
        };

        self.seen.insert(key);
        self.stats.releases_indexed += 1;

        let release_dir = std::path::absolute(&release_dir).unwrap_or(release_dir);
        Some(ReleaseInfo::from_tags(release_dir, &tags))
    }
}

impl Iterator for ReleaseStream<'_> {
    type Item = ReleaseInfo;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_file = match self.current.as_mut() {
                Some((root, walker)) => match walker.next() {
                    Some(file) => Some((*root, file)),
                    None => {
                        self.stats.entries_skipped += walker.skipped();
                        None
                    }
                },
                None => {
                    if !self.open_next_root() {
                        return None;
                    }
                    continue;
                }
            };

            match next_file {
                Some((root, file)) => {
                    if let Some(info) = self.process_file(root, &file) {
                        return Some(info);
                    }
                }
                None => self.current = None,
            }
        }
    }
}

/// Canonical absolute path of a release directory
pub fn dedup_key(release_dir: &Path) -> PathBuf {
    std::fs::canonicalize(release_dir)
        .or_else(|_| std::path::absolute(release_dir))
        .unwrap_or_else(|_| release_dir.to_path_buf())
}
