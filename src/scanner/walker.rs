//! Candidate file producer
//!
//! Lazily walks one scan root and yields the audio files of a given extension.
//! It knows nothing about releases or indexing, so it can be consumed on its own.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Iterator over matching audio files below a single root
pub struct AudioFileWalker {
    inner: walkdir::IntoIter,
    extension: String,
    skipped: usize,
}

impl AudioFileWalker {
    /// Start a fresh walk of `root`; nothing is read until the first `next()`
    pub fn new(root: &Path, extension: &str, follow_symlinks: bool) -> Self {
        Self {
            inner: WalkDir::new(root).follow_links(follow_symlinks).into_iter(),
            extension: extension.trim_start_matches('.').to_ascii_lowercase(),
            skipped: 0,
        }
    }

    /// Number of entries that could not be read so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn matches(&self, entry: &walkdir::DirEntry) -> bool {
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        is_file && has_extension(entry.path(), &self.extension)
    }
}

impl Iterator for AudioFileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if self.matches(&entry) {
                        return Some(entry.into_path());
                    }
                }
                Err(err) => {
                    self.skipped += 1;
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    let denied = err
                        .io_error()
                        .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied);
                    if denied {
                        log::debug!("Skipping unreadable entry {}: {}", path, err);
                    } else {
                        log::warn!("Skipping entry {}: {}", path, err);
                    }
                }
            }
        }
    }
}

/// Case-insensitive extension check, `ext` given without the dot
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
