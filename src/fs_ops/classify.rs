//! Per-entry selection rules.
//!
//! Order matters and short-circuits:
//! 1. a parent path segment equal to an excluded directory name -> `SkipDirExcluded`
//! 2. neither a target extension nor a specific file name -> `SkipTypeMismatch`
//! 3. an excluded pattern anywhere in the file name -> `SkipPatternExcluded`
//! 4. otherwise `Copy`
//!
//! Directories are never classified; the walk still descends into excluded
//! directories and their files are rejected one by one by rule 1.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::config::Config;

/// Outcome of the filter stages for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    SkipDirExcluded,
    SkipTypeMismatch,
    SkipPatternExcluded,
    Copy,
}

/// A node produced by the walk.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    /// Full path as enumerated
    pub path: PathBuf,
    /// Parent directory as reached from the configured source directory
    pub parent: PathBuf,
    pub is_dir: bool,
}

impl ScanEntry {
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }
}

/// Applies the configured rules; borrows the immutable Config for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    config: &'a Config,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Decide what to do with an entry. `None` for directories, which are never copied.
    pub fn classify(&self, entry: &ScanEntry) -> Option<CopyDecision> {
        if entry.is_dir {
            return None;
        }
        Some(self.classify_file(&entry.parent, entry.file_name()))
    }

    /// Decide for a file given its parent path and name.
    pub fn classify_file(&self, parent: &Path, name: &OsStr) -> CopyDecision {
        if self.in_excluded_dir(parent) {
            return CopyDecision::SkipDirExcluded;
        }

        let name = name.to_string_lossy();
        if !(self.is_target_extension(&name) || self.is_specific_file(&name)) {
            return CopyDecision::SkipTypeMismatch;
        }

        if self.matches_excluded_pattern(&name) {
            return CopyDecision::SkipPatternExcluded;
        }

        CopyDecision::Copy
    }

    /// True if any segment of `dir` equals an excluded directory name (case-sensitive).
    pub fn in_excluded_dir(&self, dir: &Path) -> bool {
        dir.components().any(|c| match c {
            Component::Normal(seg) => seg
                .to_str()
                .is_some_and(|s| self.config.excluded_dirs.contains(s)),
            _ => false,
        })
    }

    /// Lower-cased suffix (".ts") is one of the configured extensions.
    pub fn is_target_extension(&self, name: &str) -> bool {
        match suffix_of(name) {
            Some(suffix) => self.config.file_extensions.contains(&suffix.to_lowercase()),
            None => false,
        }
    }

    /// Name equals one of the specific files, ignoring case.
    pub fn is_specific_file(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.config
            .include_specific_files
            .iter()
            .any(|f| f.to_lowercase() == lower)
    }

    /// Any excluded pattern occurs in the name (case-sensitive substring).
    pub fn matches_excluded_pattern(&self, name: &str) -> bool {
        self.config
            .excluded_patterns
            .iter()
            .any(|p| name.contains(p.as_str()))
    }
}

/// Final suffix including the dot; `None` for dotfiles and names without one.
fn suffix_of(name: &str) -> Option<&str> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(&name[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::new("src", "dst")
            .with_extensions([".ts", ".md"])
            .with_excluded_dirs(["node_modules", "build"])
            .with_excluded_patterns([".d.ts", "package-lock.json"])
            .with_specific_files(["Dockerfile", ".dockerignore"])
    }

    #[test]
    fn suffix_rules() {
        assert_eq!(suffix_of("app.ts"), Some(".ts"));
        assert_eq!(suffix_of("archive.tar.gz"), Some(".gz"));
        assert_eq!(suffix_of(".env"), None);
        assert_eq!(suffix_of("Makefile"), None);
        assert_eq!(suffix_of("trailing."), None);
    }

    #[test]
    fn extension_match_ignores_case() {
        let c = cfg();
        let cl = Classifier::new(&c);
        assert_eq!(cl.classify_file(Path::new("a"), OsStr::new("APP.TS")), CopyDecision::Copy);
        assert_eq!(cl.classify_file(Path::new("a"), OsStr::new("notes.Md")), CopyDecision::Copy);
    }

    #[test]
    fn excluded_dir_anywhere_in_parent() {
        let c = cfg();
        let cl = Classifier::new(&c);
        let parent = Path::new("a").join("node_modules").join("pkg").join("lib");
        assert_eq!(
            cl.classify_file(&parent, OsStr::new("index.ts")),
            CopyDecision::SkipDirExcluded
        );
        // segment match is exact and case-sensitive
        let parent = Path::new("Build").join("node_modules_old");
        assert_eq!(cl.classify_file(&parent, OsStr::new("index.ts")), CopyDecision::Copy);
    }

    #[test]
    fn dir_exclusion_wins_over_type_mismatch() {
        let c = cfg();
        let cl = Classifier::new(&c);
        assert_eq!(
            cl.classify_file(Path::new("build"), OsStr::new("blob.bin")),
            CopyDecision::SkipDirExcluded
        );
    }

    #[test]
    fn specific_files_bypass_extension_but_not_patterns() {
        let c = cfg().with_excluded_patterns(["docker"]);
        let cl = Classifier::new(&c);
        assert_eq!(cl.classify_file(Path::new(""), OsStr::new("dockerfile")), CopyDecision::SkipPatternExcluded);
        assert_eq!(cl.classify_file(Path::new(""), OsStr::new("Dockerfile")), CopyDecision::Copy);
    }

    #[test]
    fn pattern_matches_whole_name() {
        let c = cfg();
        let cl = Classifier::new(&c);
        assert_eq!(
            cl.classify_file(Path::new(""), OsStr::new("types.d.ts")),
            CopyDecision::SkipPatternExcluded
        );
        assert_eq!(cl.classify_file(Path::new(""), OsStr::new("readme.txt")), CopyDecision::SkipTypeMismatch);
    }

    #[test]
    fn directories_have_no_decision() {
        let c = cfg();
        let entry = ScanEntry {
            path: PathBuf::from("src/app.ts"),
            parent: PathBuf::new(),
            is_dir: true,
        };
        assert_eq!(Classifier::new(&c).classify(&entry), None);
    }
}
