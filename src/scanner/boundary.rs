//! Release boundary resolution
//!
//! A release is the directory `depth` levels below a scan root that contains
//! the file. Layouts such as `root/<release>/track.flac` (depth 1) and
//! `root/YYYY-MM-DD/<release>/disc1/track.mp3` (depth 2) are both covered.

use std::path::{Path, PathBuf};

/// Compute the release directory that owns `file_path`.
///
/// When the file has fewer parent components below the root than `depth`,
/// the whole parent path is used. Files sitting directly in the root (or
/// outside it) belong to their own parent directory.
pub fn resolve_release(scan_root: &Path, file_path: &Path, depth: usize) -> PathBuf {
    let depth = depth.max(1);

    let relative_parent = match file_path
        .strip_prefix(scan_root)
        .ok()
        .and_then(Path::parent)
    {
        Some(parent) if parent.components().next().is_some() => parent,
        _ => return file_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let prefix: PathBuf = relative_parent.components().take(depth).collect();
    scan_root.join(prefix)
}
