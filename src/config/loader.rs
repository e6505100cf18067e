//! Config file parsing and loading
//!
//! The file is line oriented: `KEY=value`, keys are case-insensitive, lines
//! starting with `#` and blank lines are ignored. Directory keys may repeat;
//! for every other key the last occurrence wins.

use super::error::{ConfigError, ConfigResult};
use super::settings::{Config, DEFAULT_RELEASE_DEPTH};
use crate::core::strings::{parse_bool, split_csv};
use crate::index::category::{parse_categories, Category};
use crate::scanner::types::MediaType;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::IntoEnumIterator;

impl Config {
    /// Read and validate a config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading configuration from {}", path.display());
        Self::parse_str(&contents)
    }

    /// Parse and validate config text
    pub fn parse_str(contents: &str) -> ConfigResult<Self> {
        let mut config = Config::new(PathBuf::new());
        let mut index_root: Option<PathBuf> = None;

        for (line_no, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::warn!("Config line {}: ignoring line without '=': {}", line_no + 1, line);
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim();
            if key.is_empty() {
                continue;
            }

            match key.as_str() {
                "music_dir" => push_dir(&mut config.music_dirs, value),
                "mp3_dir" => push_dir(&mut config.mp3.roots, value),
                "flac_dir" => push_dir(&mut config.flac.roots, value),
                "index_root" => {
                    index_root = (!value.is_empty()).then(|| PathBuf::from(value));
                }
                "relative_symlinks" => config.relative_symlinks = parse_bool(value),
                "clean_on_start" => config.clean_on_start = parse_bool(value),
                "follow_symlinks" => config.follow_symlinks = parse_bool(value),
                "enable_types" => config.enabled_types = parse_types(value, line_no + 1),
                "mp3_indexes" | "flac_indexes" => {
                    let media_type = if key == "mp3_indexes" {
                        MediaType::Mp3
                    } else {
                        MediaType::Flac
                    };
                    config.type_settings_mut(media_type).categories =
                        parse_index_list(value, line_no + 1);
                }
                "mp3_release_depth" | "flac_release_depth" => {
                    let media_type = if key == "mp3_release_depth" {
                        MediaType::Mp3
                    } else {
                        MediaType::Flac
                    };
                    config.type_settings_mut(media_type).release_depth =
                        parse_depth(value, line_no + 1);
                }
                other => {
                    log::warn!(
                        "Config line {}: ignoring unknown key '{}'",
                        line_no + 1,
                        other.to_ascii_uppercase()
                    );
                }
            }
        }

        if !config.has_roots() {
            return Err(ConfigError::MissingRoots);
        }
        config.index_root = index_root.ok_or(ConfigError::MissingIndexRoot)?;

        if config.enabled_types.is_empty() {
            log::warn!("No media types enabled; nothing will be indexed");
        }
        Ok(config)
    }
}

fn push_dir(target: &mut Vec<PathBuf>, value: &str) {
    if !value.is_empty() {
        target.push(PathBuf::from(value));
    }
}

fn parse_types(value: &str, line_no: usize) -> Vec<MediaType> {
    let mut types = Vec::new();
    for name in split_csv(value) {
        match MediaType::from_str(&name) {
            Ok(media_type) if !types.contains(&media_type) => types.push(media_type),
            Ok(_) => {}
            Err(_) => log::warn!(
                "Config line {}: ignoring unknown media type '{}' (known: {})",
                line_no,
                name,
                MediaType::iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
    types
}

fn parse_index_list(value: &str, line_no: usize) -> Vec<Category> {
    let (categories, unknown) = parse_categories(&split_csv(value));
    for name in unknown {
        log::warn!(
            "Config line {}: ignoring unknown index '{}' (known: {}, group)",
            line_no,
            name,
            Category::iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    categories
}

fn parse_depth(value: &str, line_no: usize) -> usize {
    match value.parse::<i64>() {
        Ok(depth) if depth > 0 => usize::try_from(depth).unwrap_or(DEFAULT_RELEASE_DEPTH),
        _ => {
            log::warn!(
                "Config line {}: release depth '{}' is not a positive integer, using {}",
                line_no,
                value,
                DEFAULT_RELEASE_DEPTH
            );
            DEFAULT_RELEASE_DEPTH
        }
    }
}
