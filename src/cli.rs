//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - List flags (--ext, --exclude-dir, ...) replace the configured list when given.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// CLI wrapper for the flatcopy library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Collect matching source files from a tree into one flat directory",
    long_about = "Collect matching source files from a tree into one flat directory.\n\nWARNING: the destination directory is deleted and recreated on every run."
)]
pub struct Args {
    /// Directory to scan.
    #[arg(long, short = 's', value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Flat output directory (DELETED and recreated on every run).
    #[arg(long, short = 'o', value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// File extension to copy, e.g. ".ts" (repeatable; replaces the configured list).
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Directory name whose files are never copied (repeatable; replaces the configured list).
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub excluded_dirs: Vec<String>,

    /// Substring that excludes a file name (repeatable; replaces the configured list).
    #[arg(long = "exclude-pattern", value_name = "TEXT")]
    pub excluded_patterns: Vec<String>,

    /// File name always copied regardless of extension (repeatable; replaces the configured list).
    #[arg(long = "include-file", value_name = "NAME")]
    pub include_files: Vec<String>,

    /// Keep Dockerfile without the added ".txt" extension.
    #[arg(long)]
    pub no_dockerfile_txt: bool,

    /// Use this config file instead of $FLATCOPY_CONFIG / the default location.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print the config file location used by flatcopy, then exit.
    #[arg(long, help = "Print the config file location used by flatcopy and exit")]
    pub print_config: bool,

    /// Write a template config file to the config location, then exit.
    #[arg(long, help = "Write a template config file and exit")]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(src) = &self.source {
            cfg.source_dir = src.clone();
        }
        if let Some(dest) = &self.dest {
            cfg.dest_dir = dest.clone();
        }
        if !self.extensions.is_empty() {
            *cfg = std::mem::take(cfg).with_extensions(&self.extensions);
        }
        if !self.excluded_dirs.is_empty() {
            *cfg = std::mem::take(cfg).with_excluded_dirs(&self.excluded_dirs);
        }
        if !self.excluded_patterns.is_empty() {
            *cfg = std::mem::take(cfg).with_excluded_patterns(&self.excluded_patterns);
        }
        if !self.include_files.is_empty() {
            *cfg = std::mem::take(cfg).with_specific_files(&self.include_files);
        }
        if self.no_dockerfile_txt {
            cfg.dockerfile_as_text = false;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
