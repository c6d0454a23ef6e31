//! Typed error definitions for flatcopy.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Fatal vs recoverable is decided by the caller: the same `PermissionDenied`
//! aborts a run when raised while preparing the destination, but is only
//! counted when raised while copying a single file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::helpers::describe_io_error;

#[derive(Debug, Error)]
pub enum FlatCopyError {
    #[error("Invalid configuration: {reason} ({})", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Permission denied: {op} '{}': {source}{}", .path.display(), hint_suffix(.source))]
    PermissionDenied {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O failure: {op} '{}': {source}{}", .path.display(), hint_suffix(.source))]
    IoFailure {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot access entry during scan: {}: {reason}", .path.display())]
    AccessDuringScan { path: PathBuf, reason: String },

    #[error("No free name for '{name}' in {} after {attempts} attempts", .dir.display())]
    CollisionLimit {
        dir: PathBuf,
        name: String,
        attempts: u64,
    },

    #[error("Config file {}: {reason}", .path.display())]
    ConfigFile { path: PathBuf, reason: String },
}

fn hint_suffix(e: &io::Error) -> String {
    let hint = describe_io_error(e);
    if hint.is_empty() {
        String::new()
    } else {
        format!("; {hint}")
    }
}

impl FlatCopyError {
    /// Wrap an io::Error, splitting access-control failures from everything else.
    pub fn from_io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            FlatCopyError::PermissionDenied { op, path, source }
        } else {
            FlatCopyError::IoFailure { op, path, source }
        }
    }

    /// Stable numeric code for structured logs and process diagnostics.
    pub fn code(&self) -> u32 {
        match self {
            FlatCopyError::ConfigInvalid { .. } => 10,
            FlatCopyError::ConfigFile { .. } => 11,
            FlatCopyError::PermissionDenied { .. } => 20,
            FlatCopyError::IoFailure { .. } => 21,
            FlatCopyError::AccessDuringScan { .. } => 30,
            FlatCopyError::CollisionLimit { .. } => 40,
        }
    }

    /// Short machine-friendly label.
    pub fn kind(&self) -> &'static str {
        match self {
            FlatCopyError::ConfigInvalid { .. } => "config_invalid",
            FlatCopyError::ConfigFile { .. } => "config_file",
            FlatCopyError::PermissionDenied { .. } => "permission_denied",
            FlatCopyError::IoFailure { .. } => "io_failure",
            FlatCopyError::AccessDuringScan { .. } => "access_during_scan",
            FlatCopyError::CollisionLimit { .. } => "collision_limit",
        }
    }
}
