use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use flatcopy::{Classifier, Config, CopyDecision, ScanEntry};

fn decide(cfg: &Config, parent: &str, name: &str) -> CopyDecision {
    Classifier::new(cfg).classify_file(Path::new(parent), OsStr::new(name))
}

#[test]
fn default_rules_select_project_sources() {
    let cfg = Config::default();
    assert_eq!(decide(&cfg, "src", "app.ts"), CopyDecision::Copy);
    assert_eq!(decide(&cfg, "src/db", "schema.SQL"), CopyDecision::Copy);
    assert_eq!(decide(&cfg, "", "Dockerfile"), CopyDecision::Copy);
    assert_eq!(decide(&cfg, "", "docker-compose.yml"), CopyDecision::Copy);
    assert_eq!(decide(&cfg, "", ".dockerignore"), CopyDecision::Copy);
}

#[test]
fn default_rules_reject_noise() {
    let cfg = Config::default();
    assert_eq!(
        decide(&cfg, "node_modules/lodash", "index.js"),
        CopyDecision::SkipDirExcluded
    );
    assert_eq!(decide(&cfg, "src/.git/hooks", "pre-commit.py"), CopyDecision::SkipDirExcluded);
    assert_eq!(decide(&cfg, "src", "logo.png"), CopyDecision::SkipTypeMismatch);
    assert_eq!(decide(&cfg, "src", ".env"), CopyDecision::SkipTypeMismatch);
    assert_eq!(decide(&cfg, "src", "types.d.ts"), CopyDecision::SkipPatternExcluded);
    assert_eq!(decide(&cfg, "public", "vendor.min.js"), CopyDecision::SkipPatternExcluded);
    assert_eq!(decide(&cfg, "", "package-lock.json"), CopyDecision::SkipPatternExcluded);
}

#[test]
fn specific_file_names_ignore_case() {
    let cfg = Config::new("s", "d")
        .with_extensions([".ts"])
        .with_specific_files(["Makefile"]);
    assert_eq!(decide(&cfg, "", "MAKEFILE"), CopyDecision::Copy);
    assert_eq!(decide(&cfg, "", "Makefile.bak"), CopyDecision::SkipTypeMismatch);
}

#[test]
fn extension_is_last_suffix_only() {
    let cfg = Config::new("s", "d").with_extensions(["gz"]);
    assert_eq!(decide(&cfg, "", "archive.tar.gz"), CopyDecision::Copy);
    let cfg = Config::new("s", "d").with_extensions([".tar.gz"]);
    assert_eq!(decide(&cfg, "", "archive.tar.gz"), CopyDecision::SkipTypeMismatch);
}

#[test]
fn patterns_are_case_sensitive() {
    let cfg = Config::new("s", "d")
        .with_extensions([".ts"])
        .with_excluded_patterns([".gen."]);
    assert_eq!(decide(&cfg, "", "user.gen.ts"), CopyDecision::SkipPatternExcluded);
    assert_eq!(decide(&cfg, "", "user.GEN.ts"), CopyDecision::Copy);
}

#[test]
fn empty_rule_sets_copy_nothing() {
    let cfg = Config::new("s", "d")
        .with_extensions(Vec::<String>::new())
        .with_specific_files(Vec::<String>::new());
    assert_eq!(decide(&cfg, "", "app.ts"), CopyDecision::SkipTypeMismatch);
}

#[test]
fn classify_uses_entry_parent() {
    let cfg = Config::default();
    let entry = ScanEntry {
        path: PathBuf::from("/project/build/app.ts"),
        parent: PathBuf::from("build"),
        is_dir: false,
    };
    assert_eq!(
        Classifier::new(&cfg).classify(&entry),
        Some(CopyDecision::SkipDirExcluded)
    );
}
