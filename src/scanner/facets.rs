//! Facet derivation
//!
//! Secondary facets come from the release directory name (alpha bucket and
//! release group); tag-derived facets are sanitized copies of the tag values.

use crate::core::strings::{sanitize_component, UNKNOWN};
use crate::scanner::types::{ReleaseInfo, TrackTags};
use std::path::PathBuf;

/// Bucket used for names that do not start with an ASCII letter or digit
pub const OTHER_BUCKET: char = '#';

/// Facets derived purely from the release name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFacets {
    pub alpha: char,
    pub group: String,
}

/// Derive the alpha bucket and release group from a release name
pub fn derive_facets(release_name: &str) -> NameFacets {
    NameFacets {
        alpha: alpha_bucket(release_name),
        group: release_group(release_name),
    }
}

/// First character upper-cased, or `#` when it is not alphanumeric
pub fn alpha_bucket(release_name: &str) -> char {
    let first = release_name
        .chars()
        .next()
        .unwrap_or(OTHER_BUCKET)
        .to_ascii_uppercase();
    if first.is_ascii_alphanumeric() {
        first
    } else {
        OTHER_BUCKET
    }
}

/// Text after the last `-`, sanitized; `Unknown` if there is none
pub fn release_group(release_name: &str) -> String {
    match release_name.rfind('-') {
        Some(pos) if pos + 1 < release_name.len() => sanitize_component(&release_name[pos + 1..]),
        _ => UNKNOWN.to_string(),
    }
}

/// Year rendered as text, `Unknown` unless it is a positive number
pub fn year_facet(year: Option<u32>) -> String {
    match year {
        Some(y) if y > 0 => y.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn tag_facet(value: Option<&str>) -> String {
    sanitize_component(value.unwrap_or_default())
}

impl ReleaseInfo {
    /// Build the release record for `release_dir` from the tags of one of its files
    pub fn from_tags(release_dir: PathBuf, tags: &TrackTags) -> Self {
        let release_name = release_dir
            .file_name()
            .unwrap_or(release_dir.as_os_str())
            .to_os_string();
        let NameFacets { alpha, group } = derive_facets(&release_name.to_string_lossy());

        Self {
            artist: tag_facet(tags.artist.as_deref()),
            album: tag_facet(tags.album.as_deref()),
            genre: tag_facet(tags.genre.as_deref()),
            year: year_facet(tags.year),
            group,
            alpha,
            release_name,
            release_dir,
        }
    }
}
