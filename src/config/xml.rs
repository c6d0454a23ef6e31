//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Lists are written as repeated `<item>` children:
//! <config>
//!   <file_extensions><item>.rs</item><item>.toml</item></file_extensions>
//! </config>
//!
//! A list element that is present replaces the default list; an absent one keeps it.
//! Unknown elements are rejected so typos surface instead of being ignored.

use anyhow::{bail, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{normalize_extensions, Config, LogLevel};
use super::{
    DEST_DIR_DEFAULT, EXCLUDED_DIRS_DEFAULT, EXCLUDED_PATTERNS_DEFAULT,
    FILE_EXTENSIONS_DEFAULT, INCLUDE_SPECIFIC_FILES_DEFAULT, SOURCE_DIR_DEFAULT,
};
use crate::errors::FlatCopyError;
use crate::fs_ops::helpers::io_error_with_help;
use crate::fs_ops::MAX_COLLISION_ATTEMPTS;
use crate::platform::{restrict_dir_to_owner, write_new_private_file};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source_dir: Option<String>,
    dest_dir: Option<String>,
    file_extensions: Option<XmlList>,
    excluded_dirs: Option<XmlList>,
    excluded_patterns: Option<XmlList>,
    include_specific_files: Option<XmlList>,
    dockerfile_as_text: Option<bool>,
    max_collision_attempts: Option<u64>,
    log_level: Option<String>,
    log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlList {
    #[serde(rename = "item", default)]
    items: Vec<String>,
}

fn non_empty_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
}

// Map XmlConfig -> Config on top of the defaults.
fn xml_to_config(parsed: XmlConfig, path: &Path) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(p) = non_empty_path(parsed.source_dir.as_deref()) {
        cfg.source_dir = p;
    }
    if let Some(p) = non_empty_path(parsed.dest_dir.as_deref()) {
        cfg.dest_dir = p;
    }
    cfg.log_file = non_empty_path(parsed.log_file.as_deref());

    if let Some(list) = parsed.file_extensions {
        cfg.file_extensions = normalize_extensions(list.items);
    }
    if let Some(list) = parsed.excluded_dirs {
        cfg = cfg.with_excluded_dirs(list.items);
    }
    if let Some(list) = parsed.excluded_patterns {
        cfg = cfg.with_excluded_patterns(list.items);
    }
    if let Some(list) = parsed.include_specific_files {
        cfg = cfg.with_specific_files(list.items);
    }
    if let Some(flag) = parsed.dockerfile_as_text {
        cfg.dockerfile_as_text = flag;
    }
    if let Some(n) = parsed.max_collision_attempts {
        cfg.max_collision_attempts = n;
    }

    if let Some(s) = parsed.log_level.as_deref() {
        match s.trim().parse::<LogLevel>() {
            Ok(level) => cfg.log_level = level,
            Err(reason) => {
                return Err(FlatCopyError::ConfigFile {
                    path: path.to_path_buf(),
                    reason,
                }
                .into());
            }
        }
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| FlatCopyError::ConfigFile {
        path: path.to_path_buf(),
        reason: format!("read failed: {e}"),
    })?;
    let parsed: XmlConfig = from_xml_str(&contents).map_err(|e| FlatCopyError::ConfigFile {
        path: path.to_path_buf(),
        reason: format!("parse failed: {e}"),
    })?;
    xml_to_config(parsed, path)
}

/// Resolve and load the effective config file.
///
/// - `explicit` (from `--config`) must exist.
/// - Otherwise `$FLATCOPY_CONFIG` or the platform default is used when present;
///   a missing file there means "use built-in defaults".
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        if !p.exists() {
            return Err(FlatCopyError::ConfigFile {
                path: p.to_path_buf(),
                reason: "file does not exist".into(),
            }
            .into());
        }
        return load_config_from_xml_path(p);
    }

    let Ok(path) = default_config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from_xml_path(&path)
}

fn xml_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|i| format!("<item>{i}</item>"))
        .collect::<Vec<_>>()
        .join("")
}

/// Write a commented template config to `path` (parent dir 0700, file 0600 on Unix).
/// Refuses to overwrite an existing file or to write beneath a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error_with_help("create config directory", parent))?;
        let _ = restrict_dir_to_owner(parent);
    }

    let content = format!(
        "<!--\n  flatcopy configuration (XML)\n\n    source_dir              -> tree to scan\n    dest_dir                -> flat output directory (DELETED and recreated on every run)\n    file_extensions         -> suffixes to copy, matched case-insensitively\n    excluded_dirs           -> directory names whose files are never copied\n    excluded_patterns       -> substrings that exclude a file name (case-sensitive)\n    include_specific_files  -> names always copied regardless of extension\n    dockerfile_as_text      -> store Dockerfile as Dockerfile.txt\n    max_collision_attempts  -> numbered names tried per file before it is reported as an error\n    log_level               -> quiet | normal | info | debug\n    log_file                -> optional log file path\n\n  CLI flags override XML values.\n-->\n<config>\n  <source_dir>{}</source_dir>\n  <dest_dir>{}</dest_dir>\n  <file_extensions>{}</file_extensions>\n  <excluded_dirs>{}</excluded_dirs>\n  <excluded_patterns>{}</excluded_patterns>\n  <include_specific_files>{}</include_specific_files>\n  <dockerfile_as_text>true</dockerfile_as_text>\n  <max_collision_attempts>{}</max_collision_attempts>\n  <log_level>normal</log_level>\n</config>\n",
        SOURCE_DIR_DEFAULT,
        DEST_DIR_DEFAULT,
        xml_items(FILE_EXTENSIONS_DEFAULT),
        xml_items(EXCLUDED_DIRS_DEFAULT),
        xml_items(EXCLUDED_PATTERNS_DEFAULT),
        xml_items(INCLUDE_SPECIFIC_FILES_DEFAULT),
        MAX_COLLISION_ATTEMPTS,
    );

    write_new_private_file(path, content.as_bytes())?;

    info!("Created template config at {}", path.display());
    Ok(())
}
