//! Cleanup Manager
//!
//! Empties the category subtrees of one media type before re-indexing.
//! Only categories currently enabled for the type are touched.

use crate::index::category::Category;
use crate::index::error::{IndexError, IndexResult};
use crate::scanner::types::MediaType;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CleanupManager {
    index_root: PathBuf,
    dry_run: bool,
}

impl CleanupManager {
    pub fn new(index_root: &Path, dry_run: bool) -> Self {
        Self {
            index_root: index_root.to_path_buf(),
            dry_run,
        }
    }

    /// Remove every child of `index_root/<type>/<category>` for the given
    /// categories. Returns the number of entries removed (or that would be).
    pub fn clean(&self, media_type: MediaType, categories: &[Category]) -> IndexResult<usize> {
        let type_root = self.index_root.join(media_type.as_ref());
        let mut removed = 0;

        for category in categories {
            let base = type_root.join(category.dir_name());
            removed += self.clean_category(&base)?;
        }

        if removed > 0 {
            log::info!(
                "[{}] {} {} index entries",
                media_type,
                if self.dry_run { "would remove" } else { "removed" },
                removed
            );
        }
        Ok(removed)
    }

    fn clean_category(&self, base: &Path) -> IndexResult<usize> {
        // symlink_metadata so a category that is itself a link is not followed
        match fs::symlink_metadata(base) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(IndexError::NotADirectory {
                    path: base.to_path_buf(),
                })
            }
            Err(_) => return Ok(0),
        }

        let read_err = |source| IndexError::ReadDir {
            path: base.to_path_buf(),
            source,
        };

        let mut removed = 0;
        for entry in fs::read_dir(base).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();

            if self.dry_run {
                log::debug!("dry run: would remove {}", path.display());
            } else {
                let file_type = entry.file_type().map_err(read_err)?;
                let result = if file_type.is_dir() {
                    fs::remove_dir_all(&path)
                } else {
                    fs::remove_file(&path)
                };
                result.map_err(|source| IndexError::RemoveEntry {
                    path: path.clone(),
                    source,
                })?;
                log::trace!("removed {}", path.display());
            }
            removed += 1;
        }
        Ok(removed)
    }
}
