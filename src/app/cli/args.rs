//! Command-line arguments
//!
//! One positional config file plus run switches and logging flags. Parsing
//! goes through a styled `clap::Command` so help output uses the shared
//! style palette.

use crate::core::styles::StyleRole;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

const CONFIG_KEYS: &[(&str, &str)] = &[
    ("MUSIC_DIR", "shared scan root, repeatable"),
    ("MP3_DIR / FLAC_DIR", "per-type scan roots, repeatable"),
    ("INDEX_ROOT", "where the symlink index is written (required)"),
    ("ENABLE_TYPES", "comma-separated: mp3,flac"),
    ("MP3_INDEXES / FLAC_INDEXES", "alpha,genre,year,artist,album,groups"),
    ("MP3_RELEASE_DEPTH / FLAC_RELEASE_DEPTH", "directory levels per release (default 1)"),
    ("RELATIVE_SYMLINKS", "boolean, default false"),
    ("CLEAN_ON_START", "boolean, default false"),
    ("FOLLOW_SYMLINKS", "boolean, default false"),
];

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "releasedex")]
#[command(about = "Build a browsable symlink index of mp3 and flac releases")]
#[command(version)]
pub struct Args {
    /// Configuration file (KEY=value lines)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show what would be linked or removed without touching the index
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Replace index entries that already exist
    #[arg(long = "force")]
    pub force: bool,

    /// Empty enabled category trees before indexing (overrides CLEAN_ON_START)
    #[arg(long = "clean", overrides_with = "no_clean")]
    pub clean: bool,

    /// Keep existing category trees (overrides CLEAN_ON_START)
    #[arg(long = "no-clean", overrides_with = "clean")]
    pub no_clean: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to log to stderr)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// The clap command with help styling applied
    pub fn command_with_styles(color_enabled: bool) -> clap::Command {
        Self::command()
            .styles(crate::core::styles::palette_to_clap(color_enabled))
            .after_help(Self::after_help(color_enabled))
    }

    /// Parse an argument list; help, version and usage errors come back as `clap::Error`
    pub fn parse_from_args<I, T>(args: I, color_enabled: bool) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = Self::command_with_styles(color_enabled);
        let matches = cmd.try_get_matches_from_mut(args)?;
        let mut parsed = Self::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))?;

        if parsed
            .log_file
            .as_ref()
            .is_some_and(|path| path.as_os_str() == "none")
        {
            parsed.log_file = None;
        }
        Ok(parsed)
    }

    /// `Some` when `--clean` or `--no-clean` was given (the last one wins)
    pub fn clean_override(&self) -> Option<bool> {
        if self.clean {
            Some(true)
        } else if self.no_clean {
            Some(false)
        } else {
            None
        }
    }

    fn after_help(color_enabled: bool) -> String {
        let width = CONFIG_KEYS.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        let mut text = StyleRole::Header.paint("Config keys:", color_enabled);
        for (key, description) in CONFIG_KEYS {
            text.push_str(&format!(
                "\n  {}  {}",
                StyleRole::Literal.paint(&format!("{:<width$}", key), color_enabled),
                description
            ));
        }
        text
    }
}
