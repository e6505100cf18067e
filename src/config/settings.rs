//! Typed configuration
//!
//! Produced once by the loader and read by the index orchestrator. Every
//! default lives here so no call site needs its own fallback.

use crate::index::category::Category;
use crate::scanner::types::MediaType;
use std::path::{Path, PathBuf};

/// Release depth used when none (or an invalid one) is configured
pub const DEFAULT_RELEASE_DEPTH: usize = 1;

/// Settings that differ per media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSettings {
    /// Type-specific scan roots; empty means "use the shared MUSIC_DIR roots"
    pub roots: Vec<PathBuf>,
    /// Ordered set of categories to index
    pub categories: Vec<Category>,
    /// Directory levels below a scan root that bound a release (always >= 1)
    pub release_depth: usize,
}

impl TypeSettings {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            roots: Vec::new(),
            categories,
            release_depth: DEFAULT_RELEASE_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub index_root: PathBuf,
    /// Shared roots used by every type without roots of its own
    pub music_dirs: Vec<PathBuf>,
    pub relative_symlinks: bool,
    pub clean_on_start: bool,
    pub follow_symlinks: bool,
    pub enabled_types: Vec<MediaType>,
    pub mp3: TypeSettings,
    pub flac: TypeSettings,
}

impl Config {
    /// A config with every default applied and no roots
    pub fn new(index_root: impl Into<PathBuf>) -> Self {
        Self {
            index_root: index_root.into(),
            music_dirs: Vec::new(),
            relative_symlinks: false,
            clean_on_start: false,
            follow_symlinks: false,
            enabled_types: vec![MediaType::Mp3, MediaType::Flac],
            mp3: TypeSettings::with_categories(vec![
                Category::Alpha,
                Category::Genre,
                Category::Year,
                Category::Groups,
            ]),
            flac: TypeSettings::with_categories(vec![
                Category::Alpha,
                Category::Genre,
                Category::Groups,
                Category::Year,
            ]),
        }
    }

    pub fn type_settings(&self, media_type: MediaType) -> &TypeSettings {
        match media_type {
            MediaType::Mp3 => &self.mp3,
            MediaType::Flac => &self.flac,
        }
    }

    pub fn type_settings_mut(&mut self, media_type: MediaType) -> &mut TypeSettings {
        match media_type {
            MediaType::Mp3 => &mut self.mp3,
            MediaType::Flac => &mut self.flac,
        }
    }

    /// Effective scan roots: the type's own roots, else the shared ones
    pub fn scan_roots(&self, media_type: MediaType) -> &[PathBuf] {
        let own = &self.type_settings(media_type).roots;
        if own.is_empty() {
            &self.music_dirs
        } else {
            own
        }
    }

    pub fn is_enabled(&self, media_type: MediaType) -> bool {
        self.enabled_types.contains(&media_type)
    }

    pub fn index_root(&self) -> &Path {
        &self.index_root
    }

    /// True when at least one root of any kind is configured
    pub fn has_roots(&self) -> bool {
        !self.music_dirs.is_empty() || !self.mp3.roots.is_empty() || !self.flac.roots.is_empty()
    }
}
