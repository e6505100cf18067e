//! Scanner Types and Enums
//!
//! Shared types used throughout the scanner module.

use std::ffi::OsString;
use std::path::PathBuf;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Logical media type; each one gets its own index subtree
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MediaType {
    Mp3,
    Flac,
}

impl MediaType {
    /// File extension (without the dot) that identifies files of this type
    pub fn extension(self) -> &'static str {
        match self {
            MediaType::Mp3 => "mp3",
            MediaType::Flac => "flac",
        }
    }
}

/// Raw values produced by a tag reader for a single audio file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub year: Option<u32>,
}

/// One distinct release discovered during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Absolute path of the release's root directory
    pub release_dir: PathBuf,
    /// Final path component of `release_dir`
    pub release_name: OsString,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
    pub group: String,
    pub alpha: char,
}

/// Counters collected while scanning one media type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Matching audio files visited, including ones belonging to already seen releases
    pub files_seen: usize,
    /// Distinct releases yielded
    pub releases_indexed: usize,
    /// Configured roots that did not exist
    pub roots_missing: usize,
    /// Directory entries the walk could not read
    pub entries_skipped: usize,
    /// Files whose tags could not be read
    pub unreadable_tags: usize,
}
