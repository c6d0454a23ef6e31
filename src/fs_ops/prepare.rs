//! Destination preparation.
//!
//! DESTRUCTIVE: the destination directory and everything in it is deleted and
//! recreated at the start of every run, so the output always mirrors exactly
//! one run. Anything stored there by hand is lost.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::FlatCopyError;

/// Remove `dest` recursively if it exists, then create it (with parents).
///
/// A path that exists but is not a directory (regular file, symlink) is refused
/// with `ConfigInvalid` rather than deleted. Any error here is fatal for the run.
pub fn prepare_destination(dest: &Path) -> Result<(), FlatCopyError> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.file_type().is_dir() => {
            info!(path = %dest.display(), "Destination exists; removing it");
            fs::remove_dir_all(dest)
                .map_err(|e| FlatCopyError::from_io("remove destination", dest, e))?;
            debug!(path = %dest.display(), "Destination removed");
        }
        Ok(_) => {
            return Err(FlatCopyError::ConfigInvalid {
                path: dest.to_path_buf(),
                reason: "destination exists and is not a directory".into(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %dest.display(), "Destination does not exist; nothing to clear");
        }
        Err(e) => return Err(FlatCopyError::from_io("inspect destination", dest, e)),
    }

    fs::create_dir_all(dest).map_err(|e| FlatCopyError::from_io("create destination", dest, e))?;
    info!(path = %dest.display(), "Destination ready");
    Ok(())
}
