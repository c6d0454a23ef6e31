//! The copy run: prepare the destination, walk the source, filter, resolve, copy.
//!
//! Failures while preparing are fatal and returned as `Err`. Failures on a
//! single entry (unreadable directory, unresolvable type, failed copy) are
//! counted in `Stats` and the walk moves on.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::errors::FlatCopyError;
use crate::fs_ops::{
    copy_with_metadata, is_dockerfile, prepare_destination, resolve_destination_within,
    Classifier, CopyDecision, ScanEntry,
};
use crate::stats::Stats;

/// Per-entry notifications for console reporting.
#[derive(Debug)]
pub enum CopyEvent<'a> {
    /// A file was copied; `renamed` when the destination name differs from the source name.
    Copied {
        relative: &'a Path,
        dest: &'a Path,
        renamed: bool,
    },
    Skipped {
        relative: &'a Path,
        decision: CopyDecision,
    },
    Failed {
        relative: &'a Path,
        error: &'a FlatCopyError,
    },
}

/// Run the pipeline without per-entry callbacks.
pub fn run_copy(config: &Config) -> Result<Stats, FlatCopyError> {
    run_copy_with(config, |_| {})
}

/// Run the pipeline, reporting every file outcome to `on_event`.
///
/// WARNING: `config.dest_dir` is deleted and recreated before scanning.
pub fn run_copy_with<F>(config: &Config, mut on_event: F) -> Result<Stats, FlatCopyError>
where
    F: FnMut(&CopyEvent<'_>),
{
    config.validate()?;

    info!(
        source = %config.source_dir.display(),
        dest = %config.dest_dir.display(),
        extensions = ?config.file_extensions,
        specific_files = ?config.include_specific_files,
        excluded_dirs = ?config.excluded_dirs,
        excluded_patterns = ?config.excluded_patterns,
        "Starting copy run"
    );

    prepare_destination(&config.dest_dir)?;

    // Walk from canonical paths so a destination nested in the source can be
    // recognized by plain path comparison.
    let root = fs::canonicalize(&config.source_dir)
        .map_err(|e| FlatCopyError::from_io("resolve source", &config.source_dir, e))?;
    let dest_real = fs::canonicalize(&config.dest_dir)
        .map_err(|e| FlatCopyError::from_io("resolve destination", &config.dest_dir, e))?;

    let classifier = Classifier::new(config);
    let mut stats = Stats::default();

    // Sorted so collision suffixes are assigned the same way on every run.
    let walker = WalkDir::new(&root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.path() != dest_real.as_path());

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.clone());
                let relative = relative_to(&root, &path);
                let error = FlatCopyError::AccessDuringScan {
                    path: path.clone(),
                    reason: err.to_string(),
                };
                warn!(code = error.code(), kind = error.kind(), path = %path.display(), "Skipping unreadable entry");
                stats.record_failure(&path, &error);
                on_event(&CopyEvent::Failed {
                    relative: &relative,
                    error: &error,
                });
                continue;
            }
        };

        stats.total_items_scanned += 1;
        let relative = relative_to(&root, entry.path());

        let is_dir = match entry_is_dir(&entry) {
            Ok(is_dir) => is_dir,
            Err(error) => {
                warn!(code = error.code(), kind = error.kind(), path = %entry.path().display(), "Cannot determine entry type; skipping");
                stats.record_failure(entry.path(), &error);
                on_event(&CopyEvent::Failed {
                    relative: &relative,
                    error: &error,
                });
                continue;
            }
        };

        if is_dir {
            stats.dirs_scanned += 1;
            continue;
        }
        stats.files_scanned += 1;

        let scan = ScanEntry {
            path: entry.path().to_path_buf(),
            parent: source_parent(&config.source_dir, &relative),
            is_dir,
        };

        match classifier.classify(&scan) {
            Some(CopyDecision::Copy) => {
                copy_one(config, &scan, &relative, &mut stats, &mut on_event);
            }
            Some(decision) => {
                debug!(path = %relative.display(), ?decision, "Skipped");
                stats.record_skip(decision);
                on_event(&CopyEvent::Skipped {
                    relative: &relative,
                    decision,
                });
            }
            None => {}
        }
    }

    info!(
        scanned = stats.total_items_scanned,
        copied = stats.copied,
        renamed = stats.renamed,
        skipped = stats.skipped_total(),
        errors = stats.errors,
        "Copy run finished"
    );
    Ok(stats)
}

fn copy_one<F>(
    config: &Config,
    scan: &ScanEntry,
    relative: &Path,
    stats: &mut Stats,
    on_event: &mut F,
) where
    F: FnMut(&CopyEvent<'_>),
{
    let name = scan.file_name();
    let as_text = config.dockerfile_as_text && is_dockerfile(name);

    let outcome = resolve_destination_within(&config.dest_dir, name, as_text, config.max_collision_attempts)
        .and_then(|dest| copy_with_metadata(&scan.path, &dest).map(|_| dest));

    match outcome {
        Ok(dest) => {
            let renamed = dest.file_name() != Some(name);
            stats.record_copied(renamed);
            debug!(src = %relative.display(), dest = %dest.display(), renamed, "Copied");
            on_event(&CopyEvent::Copied {
                relative,
                dest: &dest,
                renamed,
            });
        }
        Err(error) => {
            warn!(code = error.code(), kind = error.kind(), src = %relative.display(), error = %error, "Copy failed");
            stats.record_failure(&scan.path, &error);
            on_event(&CopyEvent::Failed { relative, error: &error });
        }
    }
}

/// Directory check that follows symlinks, like a plain `is_dir` on the path.
fn entry_is_dir(entry: &DirEntry) -> Result<bool, FlatCopyError> {
    let ft = entry.file_type();
    if !ft.is_symlink() {
        return Ok(ft.is_dir());
    }
    fs::metadata(entry.path())
        .map(|m| m.is_dir())
        .map_err(|e| FlatCopyError::AccessDuringScan {
            path: entry.path().to_path_buf(),
            reason: e.to_string(),
        })
}

/// Parent of a file as reached from the configured source directory, so every
/// segment of `source_dir` takes part in directory exclusion.
fn source_parent(source_dir: &Path, relative: &Path) -> PathBuf {
    match relative.parent() {
        Some(p) => source_dir.join(p),
        None => source_dir.to_path_buf(),
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
