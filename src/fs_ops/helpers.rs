//! I/O helper utilities.
//!
//! Turns a raw io::Error into a short actionable hint, keyed on the OS error
//! code where one is available. Used by `FlatCopyError` display and by the
//! anyhow adapter below.
//!
//! Usage:
//!   // in functions returning anyhow::Result<_>
//!   fs::read_to_string(p).map_err(io_error_with_help("read config", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

#[cfg(unix)]
use libc;

/// Platform-aware hint for an io::Error (empty when nothing useful applies).
pub fn describe_io_error(e: &io::Error) -> String {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        let hint = match code {
            libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
            libc::EBUSY => "resource busy; a file may be open in another program",
            libc::ENOENT => "path not found; verify it exists",
            libc::EEXIST => "already exists",
            libc::ENOSPC => "insufficient space on device",
            libc::EROFS => "read-only filesystem; cannot write here",
            libc::ELOOP => "too many symbolic link levels; possible symlink cycle",
            libc::ENAMETOOLONG => "filename or path too long",
            libc::ENOTEMPTY => "directory not empty",
            libc::EMFILE | libc::ENFILE => "too many open files",
            _ => "",
        };
        #[cfg(windows)]
        let hint = match code {
            5 => "access denied; check permissions",          // ERROR_ACCESS_DENIED
            32 => "sharing violation; file is in use",        // ERROR_SHARING_VIOLATION
            2 | 3 => "path not found; verify it exists",      // FILE/ PATH NOT FOUND
            80 => "already exists",                           // ERROR_FILE_EXISTS
            112 => "insufficient disk space",                 // ERROR_DISK_FULL
            19 => "write protected / read-only media",        // ERROR_WRITE_PROTECT
            145 => "directory not empty",                     // ERROR_DIR_NOT_EMPTY
            206 => "filename or path too long",               // ERROR_FILENAME_EXCED_RANGE
            _ => "",
        };
        #[cfg(not(any(unix, windows)))]
        let hint = "";

        if hint.is_empty() {
            format!("os code {code}")
        } else {
            format!("{hint} [os code: {code}]")
        }
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "permission denied; check ownership and write permissions".into()
            }
            io::ErrorKind::NotFound => "path not found; verify it exists".into(),
            io::ErrorKind::AlreadyExists => "already exists".into(),
            _ => String::new(),
        }
    }
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        let hint = describe_io_error(&e);
        if hint.is_empty() {
            anyhow!("{} '{}': {}", op, path.display(), e)
        } else {
            anyhow!("{} '{}': {} ({})", op, path.display(), e, hint)
        }
    }
}
