//! Tag reading
//!
//! The scanner only depends on the [`TagReader`] trait; the production
//! implementation reads files with symphonia.

use crate::scanner::types::TrackTags;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::{Limit, MetadataOptions, MetadataRevision, StandardTagKey, Tag, Value};
use symphonia::core::probe::Hint;
use symphonia::default::get_probe;

static LEADING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("year pattern is valid"));

/// Capability that extracts artist/album/genre/year from an audio file.
///
/// Returns `None` when the file has no readable metadata container at all.
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> Option<TrackTags>;
}

/// Reads ID3 and container metadata (e.g. FLAC Vorbis comments) via symphonia
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaTagReader;

impl SymphoniaTagReader {
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for SymphoniaTagReader {
    fn read_tags(&self, path: &Path) -> Option<TrackTags> {
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            hint.with_extension(ext);
        }

        let src = match std::fs::File::open(path) {
            Ok(f) => f,
            Err(e) => {
                log::debug!("Cannot open {} for tag reading: {}", path.display(), e);
                return None;
            }
        };
        let mss = MediaSourceStream::new(Box::new(src), Default::default());

        // Artwork is never used, so don't buffer it.
        let meta_opts = MetadataOptions {
            limit_visual_bytes: Limit::Maximum(0),
            ..Default::default()
        };

        let mut probed = match get_probe().format(&hint, mss, &FormatOptions::default(), &meta_opts)
        {
            Ok(p) => p,
            Err(e) => {
                log::debug!("No readable tags in {}: {}", path.display(), e);
                return None;
            }
        };

        let mut tags = TrackTags::default();

        // ID3 tags are read before the container is instantiated.
        if let Some(mut metadata) = probed.metadata.get() {
            if let Some(rev) = metadata.skip_to_latest() {
                apply_revision(rev, &mut tags);
            }
        }

        let mut metadata = probed.format.metadata();
        if let Some(rev) = metadata.skip_to_latest() {
            apply_revision(rev, &mut tags);
        }

        log::trace!("Tags for {}: {:?}", path.display(), tags);
        Some(tags)
    }
}

fn apply_revision(rev: &MetadataRevision, out: &mut TrackTags) {
    let mut album_artist = None;

    for tag in rev.tags() {
        match tag_key(tag) {
            Some(StandardTagKey::Artist) if out.artist.is_none() => {
                out.artist = value_to_string(&tag.value);
            }
            Some(StandardTagKey::AlbumArtist) if album_artist.is_none() => {
                album_artist = value_to_string(&tag.value);
            }
            Some(StandardTagKey::Album) if out.album.is_none() => {
                out.album = value_to_string(&tag.value);
            }
            Some(StandardTagKey::Genre) if out.genre.is_none() => {
                out.genre = value_to_string(&tag.value);
            }
            Some(StandardTagKey::Date | StandardTagKey::ReleaseDate | StandardTagKey::OriginalDate)
                if out.year.is_none() =>
            {
                out.year = value_to_string(&tag.value).and_then(|v| parse_year(&v));
            }
            _ => {}
        }
    }

    if out.artist.is_none() {
        out.artist = album_artist;
    }
}

// Some readers don't assign std_key; fall back on the raw key name.
fn tag_key(tag: &Tag) -> Option<StandardTagKey> {
    if tag.std_key.is_some() {
        return tag.std_key;
    }
    match tag.key.trim().to_ascii_lowercase().as_str() {
        "artist" => Some(StandardTagKey::Artist),
        "albumartist" | "album artist" => Some(StandardTagKey::AlbumArtist),
        "album" => Some(StandardTagKey::Album),
        "genre" => Some(StandardTagKey::Genre),
        "date" | "year" => Some(StandardTagKey::Date),
        _ => None,
    }
}

fn value_to_string(v: &Value) -> Option<String> {
    let s = match v {
        Value::String(s) => s.clone(),
        _ => v.to_string(),
    };
    let s = s.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Leading digits of a date-like tag value, if they form a positive year
pub fn parse_year(value: &str) -> Option<u32> {
    LEADING_YEAR
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|year| *year > 0)
}
