//! Config validation logic.
//! Verifies the source tree exists and that wiping the destination cannot touch it.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

use crate::errors::FlatCopyError;

use super::types::Config;

impl Config {
    /// Check the directories before anything is deleted.
    ///
    /// - source_dir must exist and be a directory.
    /// - dest_dir must not be the source, nor an ancestor of it (the wipe would remove it).
    /// - Relative paths are accepted with a warning; they depend on the working directory.
    pub fn validate(&self) -> Result<(), FlatCopyError> {
        let src = &self.source_dir;
        let dest = &self.dest_dir;

        if !src.exists() {
            error!(path = %src.display(), "source_dir does not exist");
            return Err(invalid(src, "source directory does not exist"));
        }
        if !src.is_dir() {
            error!(path = %src.display(), "source_dir is not a directory");
            return Err(invalid(src, "source path is not a directory"));
        }

        if src.is_relative() {
            warn!(path = %src.display(), "source_dir is relative; it is resolved against the current working directory");
        }
        if dest.is_relative() {
            warn!(path = %dest.display(), "dest_dir is relative; it is resolved against the current working directory");
        }

        let src_real = fs::canonicalize(src).unwrap_or_else(|_| src.clone());
        let dest_real = resolve_lenient(dest);

        if src_real == dest_real {
            return Err(invalid(dest, "destination resolves to the source directory"));
        }
        if src_real.starts_with(&dest_real) {
            return Err(invalid(
                dest,
                "destination contains the source directory and would delete it",
            ));
        }
        if dest_real.starts_with(&src_real) {
            debug!(dest = %dest_real.display(), "dest_dir is inside source_dir; its subtree will not be scanned");
        }

        debug!(source = %src_real.display(), dest = %dest_real.display(), "Config validated");
        Ok(())
    }
}

fn invalid(path: &Path, reason: &str) -> FlatCopyError {
    FlatCopyError::ConfigInvalid {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Canonicalize the longest existing ancestor and re-append the missing tail.
/// The destination usually does not exist yet on a first run.
pub(crate) fn resolve_lenient(path: &Path) -> PathBuf {
    if let Ok(p) = fs::canonicalize(path) {
        return p;
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut tail = Vec::new();
    let mut cur = absolute.as_path();
    loop {
        if let Ok(real) = fs::canonicalize(cur) {
            let mut out = real;
            for part in tail.iter().rev() {
                out.push(part);
            }
            return out;
        }
        match (cur.file_name(), cur.parent()) {
            (Some(name), Some(parent)) => {
                tail.push(name.to_os_string());
                cur = parent;
            }
            _ => return absolute,
        }
    }
}
