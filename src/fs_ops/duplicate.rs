//! Duplicate-name resolution for the flat destination.
//!
//! Policy:
//! - A free name is used unchanged.
//! - A taken name becomes `stem_1.ext`, `stem_2.ext`, ... (`stem_1` without an extension).
//! - A Dockerfile (any case) can be stored as `Dockerfile.txt` first.
//!
//! Notes:
//! - This only decides the path name based on current filesystem state; the copy
//!   opens the result with create_new so a late collision fails instead of clobbering.
//! - The counter is bounded (MAX_COLLISION_ATTEMPTS unless the caller passes its own limit).

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::FlatCopyError;

/// Destination name for any Dockerfile, whatever the case of the source name.
pub const DOCKERFILE_TEXT_NAME: &str = "Dockerfile.txt";

/// Upper bound on numbered candidates tried for one name.
pub const MAX_COLLISION_ATTEMPTS: u64 = 10_000;

/// True when `name` is a Dockerfile (case-insensitive exact match).
pub fn is_dockerfile(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|s| s.eq_ignore_ascii_case("dockerfile"))
}

/// Compute a destination path inside `dst_dir` for `name` that does not exist yet.
///
/// - treat_as_dockerfile_variant: when set and `name` is a Dockerfile (any case),
///   the requested name becomes "Dockerfile.txt" before resolution.
///
/// Examples:
/// - "util.ts" -> "util_1.ts", "util_2.ts", ...
/// - "Makefile" -> "Makefile_1"
/// - ".env" -> ".env_1"
/// - "archive.tar.gz" -> "archive.tar_1.gz"
pub fn resolve_destination(
    dst_dir: &Path,
    name: &OsStr,
    treat_as_dockerfile_variant: bool,
) -> Result<PathBuf, FlatCopyError> {
    resolve_destination_within(dst_dir, name, treat_as_dockerfile_variant, MAX_COLLISION_ATTEMPTS)
}

/// `resolve_destination` with an explicit bound on numbered candidates.
pub(crate) fn resolve_destination_within(
    dst_dir: &Path,
    name: &OsStr,
    treat_as_dockerfile_variant: bool,
    max_attempts: u64,
) -> Result<PathBuf, FlatCopyError> {
    let requested = if treat_as_dockerfile_variant && is_dockerfile(name) {
        OsString::from(DOCKERFILE_TEXT_NAME)
    } else {
        name.to_os_string()
    };

    let candidate = dst_dir.join(&requested);
    if !candidate.exists() {
        return Ok(candidate);
    }
    unique_with_numeric_suffix(dst_dir, &requested, max_attempts)
}

/// Split at the last dot; dotfiles and names ending in "." have no extension.
fn split_stem_ext(name: &OsStr) -> (OsString, Option<OsString>) {
    let base = Path::new(name);
    match (base.file_stem(), base.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => (stem.to_os_string(), Some(ext.to_os_string())),
        _ => (name.to_os_string(), None),
    }
}

/// Return a unique path by appending "_n" to the stem until no collision.
fn unique_with_numeric_suffix(
    dst_dir: &Path,
    name: &OsStr,
    max_attempts: u64,
) -> Result<PathBuf, FlatCopyError> {
    // OsString keeps non-UTF8 names intact.
    let (stem, ext) = split_stem_ext(name);

    for n in 1..=max_attempts {
        let candidate = dst_dir.join(build_name_with_suffix(&stem, ext.as_deref(), n));
        if !candidate.exists() {
            if n > 1 {
                trace!(name = ?name, dir = %dst_dir.display(), attempts = n, "duplicate: found free numbered name");
            }
            return Ok(candidate);
        }
    }

    Err(FlatCopyError::CollisionLimit {
        dir: dst_dir.to_path_buf(),
        name: name.to_string_lossy().into_owned(),
        attempts: max_attempts,
    })
}

fn build_name_with_suffix(stem: &OsStr, ext: Option<&OsStr>, n: u64) -> OsString {
    let mut new_name = OsString::from(stem);
    new_name.push(format!("_{n}"));
    if let Some(e) = ext {
        new_name.push(".");
        new_name.push(e);
    }
    new_name
}
