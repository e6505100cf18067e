//! Common test utilities and helpers
//!
//! Fixture libraries are plain text files named like audio tracks. Their
//! content is `key=value` tag lines read back by [`FixtureTagReader`].

#![allow(dead_code)]

use releasedex::config::Config;
use releasedex::scanner::{TagReader, TrackTags};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const UNREADABLE: &str = "unreadable";

/// Tag reader that parses the fixture file content
pub struct FixtureTagReader;

impl TagReader for FixtureTagReader {
    fn read_tags(&self, path: &Path) -> Option<TrackTags> {
        let content = fs::read_to_string(path).ok()?;
        if content.trim() == UNREADABLE {
            return None;
        }
        let mut tags = TrackTags::default();
        for (key, value) in content.lines().filter_map(|l| l.split_once('=')) {
            match key {
                "artist" => tags.artist = Some(value.to_string()),
                "album" => tags.album = Some(value.to_string()),
                "genre" => tags.genre = Some(value.to_string()),
                "year" => tags.year = value.parse().ok(),
                _ => {}
            }
        }
        Some(tags)
    }
}

/// A temporary music library with an index root next to it
pub struct Library {
    pub tmp: TempDir,
    pub music: PathBuf,
    pub index: PathBuf,
}

impl Library {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let music = tmp.path().join("music");
        let index = tmp.path().join("index");
        fs::create_dir_all(&music).unwrap();
        Self { tmp, music, index }
    }

    /// Add a track at `music/relative`
    pub fn track(&self, relative: &str, tags: &str) -> PathBuf {
        let path = self.music.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, tags).unwrap();
        path
    }

    /// Config with `music` as the shared root and every other setting default
    pub fn config(&self) -> Config {
        let mut config = Config::new(&self.index);
        config.music_dirs = vec![self.music.clone()];
        config
    }

    /// Write a config file into the temp dir and return its path
    pub fn config_file(&self, extra: &str) -> PathBuf {
        let path = self.tmp.path().join("releasedex.conf");
        let text = format!(
            "MUSIC_DIR={}\nINDEX_ROOT={}\n{}",
            self.music.display(),
            self.index.display(),
            extra
        );
        fs::write(&path, text).unwrap();
        path
    }

    /// Every symlink in the index, relative to the index root, with its target
    pub fn links(&self) -> BTreeMap<PathBuf, PathBuf> {
        let mut links = BTreeMap::new();
        collect_links(&self.index, &self.index, &mut links);
        links
    }
}

fn collect_links(base: &Path, dir: &Path, links: &mut BTreeMap<PathBuf, PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.map(Result::unwrap) {
        let path = entry.path();
        let file_type = entry.file_type().unwrap();
        if file_type.is_symlink() {
            let relative = path.strip_prefix(base).unwrap().to_path_buf();
            links.insert(relative, fs::read_link(&path).unwrap());
        } else if file_type.is_dir() {
            collect_links(base, &path, links);
        }
    }
}
