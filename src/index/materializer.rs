//! Index Materializer
//!
//! Writes `index_root/<type>/<category>/<facet>/<release_name>` symlinks that
//! point back at release directories. Existing links are kept unless forced,
//! which is what makes repeated runs idempotent.

use crate::index::category::Category;
use crate::index::error::{IndexError, IndexResult};
use crate::scanner::types::{MediaType, ReleaseInfo};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// What happened (or would happen, in dry-run mode) to a single link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// No entry existed; a new link was created
    Created,
    /// An entry existed and was replaced because of `force`
    Replaced,
    /// An entry existed and was left untouched
    Kept,
}

/// Link counts for one or more releases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub created: usize,
    pub replaced: usize,
    pub kept: usize,
}

impl LinkCounts {
    pub fn record(&mut self, outcome: LinkOutcome) {
        match outcome {
            LinkOutcome::Created => self.created += 1,
            LinkOutcome::Replaced => self.replaced += 1,
            LinkOutcome::Kept => self.kept += 1,
        }
    }

    pub fn add(&mut self, other: LinkCounts) {
        self.created += other.created;
        self.replaced += other.replaced;
        self.kept += other.kept;
    }
}

/// Creates the category symlinks for releases of one media type
#[derive(Debug, Clone)]
pub struct Materializer {
    type_root: PathBuf,
    media_type: MediaType,
    relative_symlinks: bool,
    force: bool,
    dry_run: bool,
}

impl Materializer {
    pub fn new(
        index_root: &Path,
        media_type: MediaType,
        relative_symlinks: bool,
        force: bool,
        dry_run: bool,
    ) -> Self {
        Self {
            type_root: index_root.join(media_type.as_ref()),
            media_type,
            relative_symlinks,
            force,
            dry_run,
        }
    }

    /// Directory holding the links of `release` for one category
    pub fn category_dir(&self, category: Category, release: &ReleaseInfo) -> PathBuf {
        self.type_root
            .join(category.dir_name())
            .join(category.facet_value(release))
    }

    /// Link `release` into every category, in order
    pub fn materialize(
        &self,
        release: &ReleaseInfo,
        categories: &[Category],
    ) -> IndexResult<LinkCounts> {
        let mut counts = LinkCounts::default();
        for &category in categories {
            let base = self.category_dir(category, release);
            self.ensure_dir(&base)?;
            let outcome = self.link_release(&base, release)?;
            counts.record(outcome);
        }
        Ok(counts)
    }

    fn ensure_dir(&self, dir: &Path) -> IndexResult<()> {
        if self.dry_run {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|source| IndexError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn link_release(&self, base: &Path, release: &ReleaseInfo) -> IndexResult<LinkOutcome> {
        let link = base.join(&release.release_name);
        let target_abs =
            std::path::absolute(&release.release_dir).unwrap_or_else(|_| release.release_dir.clone());
        let target = if self.relative_symlinks {
            relative_target(&target_abs, base).unwrap_or_else(|| target_abs.clone())
        } else {
            target_abs
        };

        let outcome = match fs::symlink_metadata(&link) {
            Ok(_) if !self.force => {
                log::trace!("[{}] keeping existing {}", self.media_type, link.display());
                return Ok(LinkOutcome::Kept);
            }
            Ok(existing) => {
                if !self.dry_run {
                    remove_entry(&link, &existing)?;
                }
                LinkOutcome::Replaced
            }
            Err(_) => LinkOutcome::Created,
        };

        if self.dry_run {
            log::debug!(
                "[{}] dry run: would link {} -> {} ({:?})",
                self.media_type,
                link.display(),
                target.display(),
                outcome
            );
            return Ok(outcome);
        }

        create_symlink(&target, &link).map_err(|source| IndexError::CreateLink {
            link: link.clone(),
            target: target.clone(),
            source,
        })?;
        log::debug!(
            "[{}] {:?} {} -> {}",
            self.media_type,
            outcome,
            link.display(),
            target.display()
        );
        Ok(outcome)
    }
}

fn remove_entry(path: &Path, existing: &fs::Metadata) -> IndexResult<()> {
    let result = if existing.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|source| IndexError::RemoveEntry {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

/// Path from `from_dir` to `target`, resolving symlinks where both exist.
///
/// Returns `None` when the two paths share no common root.
pub fn relative_target(target: &Path, from_dir: &Path) -> Option<PathBuf> {
    let target = fs::canonicalize(target).unwrap_or_else(|_| target.to_path_buf());
    let from_dir = fs::canonicalize(from_dir).unwrap_or_else(|_| from_dir.to_path_buf());
    diff_paths(&target, &from_dir)
}

/// Lexical difference between two absolute paths
fn diff_paths(target: &Path, base: &Path) -> Option<PathBuf> {
    let target: Vec<Component> = target.components().filter(|c| *c != Component::CurDir).collect();
    let base: Vec<Component> = base.components().filter(|c| *c != Component::CurDir).collect();

    // Both need the same root (and prefix on Windows) to be relatable.
    let rooted = |c: &Component| matches!(c, Component::Prefix(_) | Component::RootDir);
    let target_root: Vec<_> = target.iter().take_while(|c| rooted(c)).collect();
    let base_root: Vec<_> = base.iter().take_while(|c| rooted(c)).collect();
    if target_root.is_empty() || target_root != base_root {
        return None;
    }

    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();
    if base[common..].iter().any(|c| *c == Component::ParentDir) {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}
