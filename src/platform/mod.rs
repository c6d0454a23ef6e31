//! Owner-private files: the config template and the log file.
//!
//! The write path is shared; the OS modules only supply the permission bits
//! (0600 files / 0700 config dir on Unix, inherited ACLs on Windows) and the
//! directory fsync after a rename.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
use unix as os;
#[cfg(not(unix))]
use windows as os;

pub use os::restrict_dir_to_owner;

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Open `path` for appending, creating it owner-only if missing.
/// An existing file keeps its permissions.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    os::owner_only(&mut opts);
    opts.open(path)
}

/// Write `contents` to a new owner-only file at `path` via a temp sibling and rename.
pub fn write_new_private_file(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "config path has no parent"))?;
    let tmp = tmp_config_sibling_name(path);

    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    os::owner_only(&mut opts);
    let mut f = opts
        .open(&tmp)
        .with_context(|| format!("create temp '{}'", tmp.display()))?;
    let written = f.write_all(contents).and_then(|()| f.sync_all());
    drop(f);

    if let Err(e) = written.and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("write '{}'", path.display()));
    }
    os::sync_dir(parent).with_context(|| format!("fsync dir '{}'", parent.display()))
}

/// Hidden sibling used while writing: .flatcopy.config.tmp.<pid>.<nanos>.<seq>
fn tmp_config_sibling_name(target: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!(".flatcopy.config.tmp.{}.{nanos}.{seq}", std::process::id());
    target
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn sibling_names_are_unique() {
        let target = Path::new("dir/config.xml");
        let names: HashSet<_> = (0..16).map(|_| tmp_config_sibling_name(target)).collect();
        assert_eq!(names.len(), 16);
        assert!(names.iter().all(|p| p.parent() == Some(Path::new("dir"))));
    }

    #[test]
    fn private_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("config.xml");
        write_new_private_file(&cfg, b"<x/>").unwrap();
        assert_eq!(fs::read(&cfg).unwrap(), b"<x/>");

        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .starts_with(".flatcopy.config.tmp.")
            })
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn log_file_appends_and_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("run.log");
        writeln!(open_log_file_secure_append(&path).unwrap(), "one").unwrap();
        writeln!(open_log_file_secure_append(&path).unwrap(), "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_owner_only_and_existing_modes_kept() {
        use std::os::unix::fs::PermissionsExt;
        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;

        let dir = tempdir().unwrap();
        let cfg = dir.path().join("config.xml");
        write_new_private_file(&cfg, b"<x/>").unwrap();
        assert_eq!(mode(&cfg), 0o600);

        let fresh = dir.path().join("new.log");
        open_log_file_secure_append(&fresh).unwrap();
        assert_eq!(mode(&fresh), 0o600);

        let shared = dir.path().join("shared.log");
        fs::write(&shared, b"hello").unwrap();
        fs::set_permissions(&shared, fs::Permissions::from_mode(0o640)).unwrap();
        open_log_file_secure_append(&shared).unwrap();
        assert_eq!(mode(&shared), 0o640);
    }
}
