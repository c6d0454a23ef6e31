//! Core configuration types.
//! - Config holds the selection rules and the two directories of a run.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::fs_ops::MAX_COLLISION_ATTEMPTS;

use super::{
    DEST_DIR_DEFAULT, EXCLUDED_DIRS_DEFAULT, EXCLUDED_PATTERNS_DEFAULT, FILE_EXTENSIONS_DEFAULT,
    INCLUDE_SPECIFIC_FILES_DEFAULT, SOURCE_DIR_DEFAULT,
};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one copy run.
///
/// Built once (defaults, then XML, then CLI) and passed by reference to every
/// stage; nothing mutates it while the pipeline runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tree to scan
    pub source_dir: PathBuf,
    /// Flat output directory; wiped at the start of every run
    pub dest_dir: PathBuf,
    /// Lower-case suffixes with a leading dot (".ts")
    pub file_extensions: BTreeSet<String>,
    /// Directory names that disqualify every file beneath them
    pub excluded_dirs: BTreeSet<String>,
    /// Substrings that disqualify a file name
    pub excluded_patterns: BTreeSet<String>,
    /// File names copied regardless of extension (compared case-insensitively)
    pub include_specific_files: BTreeSet<String>,
    /// Store any Dockerfile as "Dockerfile.txt" at the destination
    pub dockerfile_as_text: bool,
    /// Numbered names tried per file before giving up with CollisionLimit
    pub max_collision_attempts: u64,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR_DEFAULT),
            dest_dir: PathBuf::from(DEST_DIR_DEFAULT),
            file_extensions: normalize_extensions(FILE_EXTENSIONS_DEFAULT.iter().copied()),
            excluded_dirs: to_set(EXCLUDED_DIRS_DEFAULT.iter().copied()),
            excluded_patterns: to_set(EXCLUDED_PATTERNS_DEFAULT.iter().copied()),
            include_specific_files: to_set(INCLUDE_SPECIFIC_FILES_DEFAULT.iter().copied()),
            dockerfile_as_text: true,
            max_collision_attempts: MAX_COLLISION_ATTEMPTS,
            log_level: LogLevel::Normal,
            log_file: None,
        }
    }
}

impl Config {
    /// Construct a Config with explicit directories; selection rules use defaults.
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            ..Default::default()
        }
    }

    /// Replace the extension list (entries are normalized).
    pub fn with_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.file_extensions = normalize_extensions(exts);
        self
    }

    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_dirs = to_set(dirs);
        self
    }

    pub fn with_excluded_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_patterns = to_set(patterns);
        self
    }

    pub fn with_specific_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_specific_files = to_set(names);
        self
    }

    /// Bound the numbered-name search per file.
    pub fn with_max_collision_attempts(mut self, attempts: u64) -> Self {
        self.max_collision_attempts = attempts;
        self
    }
}

/// Lower-case each extension and make sure it starts with a dot; empties are dropped.
pub fn normalize_extensions<I, S>(exts: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exts.into_iter()
        .map(|e| e.as_ref().trim().to_lowercase())
        .filter(|e| !e.is_empty() && e != ".")
        .map(|e| if e.starts_with('.') { e } else { format!(".{e}") })
        .collect()
}

fn to_set<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
