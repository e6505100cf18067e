//! Test modules for the index writer
//!
//! Everything runs against real temporary directories; symlink behavior is
//! only exercised on unix.


use crate::scanner::types::{ReleaseInfo, TrackTags};
use std::fs;
use std::path::Path;

/// Create `root/name` and describe it as a release with the given tags
pub fn make_release(root: &Path, name: &str, tags: &TrackTags) -> ReleaseInfo {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    ReleaseInfo::from_tags(dir, tags)
}

pub fn rock_tags() -> TrackTags {
    TrackTags {
        artist: Some("Artist".to_string()),
        album: Some("Album".to_string()),
        genre: Some("Rock".to_string()),
        year: Some(2023),
    }
}
