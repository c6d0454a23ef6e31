//! Counters for one run.
//! Owned by the pipeline loop and handed back to the caller for reporting.

use std::path::PathBuf;

use crate::errors::FlatCopyError;
use crate::fs_ops::CopyDecision;

/// A recovered per-entry failure, kept so the report can list it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub path: PathBuf,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_items_scanned: u64,
    pub dirs_scanned: u64,
    pub files_scanned: u64,
    pub skipped_dir_exclusion: u64,
    pub skipped_type_mismatch: u64,
    pub skipped_pattern_exclusion: u64,
    pub copied: u64,
    pub renamed: u64,
    pub errors: u64,
    pub failures: Vec<Failure>,
}

impl Stats {
    /// Count a skip decision. `Copy` is counted by `record_copied` once the copy succeeds.
    pub fn record_skip(&mut self, decision: CopyDecision) {
        match decision {
            CopyDecision::SkipDirExcluded => self.skipped_dir_exclusion += 1,
            CopyDecision::SkipTypeMismatch => self.skipped_type_mismatch += 1,
            CopyDecision::SkipPatternExcluded => self.skipped_pattern_exclusion += 1,
            CopyDecision::Copy => {}
        }
    }

    pub fn record_copied(&mut self, renamed: bool) {
        self.copied += 1;
        if renamed {
            self.renamed += 1;
        }
    }

    pub fn record_failure(&mut self, path: impl Into<PathBuf>, err: &FlatCopyError) {
        self.errors += 1;
        self.failures.push(Failure {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        });
    }

    pub fn skipped_total(&self) -> u64 {
        self.skipped_dir_exclusion + self.skipped_type_mismatch + self.skipped_pattern_exclusion
    }

    /// True when no entry failed.
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}
