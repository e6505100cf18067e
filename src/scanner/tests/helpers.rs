//! Test helper functions for scanner unit tests
//!
//! These helpers are separate from the integration test helpers in
//! tests/common/ since unit tests and integration tests run in different
//! contexts.

use crate::scanner::tags::TagReader;
use crate::scanner::types::TrackTags;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker content for a track whose tags cannot be read
pub const UNREADABLE: &str = "unreadable";

/// Tag reader that parses `key=value` lines from the fixture file itself
///
/// Every call is recorded so tests can assert how often tags were read.
#[derive(Default)]
pub struct FixtureTagReader {
    reads: RefCell<Vec<PathBuf>>,
}

impl FixtureTagReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }
}

impl TagReader for FixtureTagReader {
    fn read_tags(&self, path: &Path) -> Option<TrackTags> {
        self.reads.borrow_mut().push(path.to_path_buf());

        let content = fs::read_to_string(path).ok()?;
        if content.trim() == UNREADABLE {
            return None;
        }

        let mut tags = TrackTags::default();
        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.to_string();
            match key {
                "artist" => tags.artist = Some(value),
                "album" => tags.album = Some(value),
                "genre" => tags.genre = Some(value),
                "year" => tags.year = value.parse().ok(),
                _ => {}
            }
        }
        Some(tags)
    }
}

/// Write a fixture track at `root/relative` with the given tag lines
pub fn write_track(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}
