//! Metadata preservation.
//! - Copies timestamps (atime, mtime) and permissions from source->dest.
//! - Best-effort: failures to set times/perms are logged and ignored.

use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Preserve metadata on `dest` using already-fetched `src_meta`.
/// Callers pass src metadata to avoid re-statting the source repeatedly.
pub fn preserve_metadata(dest: &Path, src_meta: &fs::Metadata) {
    // 1) Timestamps (before permissions: a read-only dest rejects time updates on Windows)
    let mt = FileTime::from_last_modification_time(src_meta);
    let at = FileTime::from_last_access_time(src_meta);
    if let Err(e) = set_file_times(dest, at, mt) {
        warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on destination");
    } else {
        trace!(path = %dest.display(), "set atime/mtime on destination");
    }

    // 2) Permissions (mode on Unix, readonly attribute on Windows)
    if let Err(e) = fs::set_permissions(dest, src_meta.permissions()) {
        warn!(path = %dest.display(), error = %e, "failed to set permissions on destination");
    } else {
        trace!(path = %dest.display(), "set permissions on destination");
    }
}
