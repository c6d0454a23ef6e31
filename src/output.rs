use owo_colors::OwoColorize;

use crate::stats::Stats;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as "Copied: a/app.ts -> app.ts" which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Render the end-of-run tally as plain lines.
pub fn format_summary(stats: &Stats) -> String {
    let mut lines = vec![
        "--- Summary ---".to_string(),
        format!("Items scanned: {}", stats.total_items_scanned),
        format!("  directories: {}", stats.dirs_scanned),
        format!("  files: {}", stats.files_scanned),
        format!("Files skipped: {}", stats.skipped_total()),
        format!("  in excluded directory: {}", stats.skipped_dir_exclusion),
        format!("  type mismatch (extension/name): {}", stats.skipped_type_mismatch),
        format!("  excluded name pattern: {}", stats.skipped_pattern_exclusion),
        format!("Files copied: {}", stats.copied),
        format!("  renamed on collision: {}", stats.renamed),
        format!("Access/copy errors: {}", stats.errors),
    ];
    for f in &stats.failures {
        lines.push(format!("  [{}] {}: {}", f.kind, f.path.display(), f.message));
    }
    lines.join("\n")
}

/// Print the end-of-run tally; errors are highlighted when present.
pub fn print_summary(stats: &Stats) {
    print_user(&format_summary(stats));
    if stats.is_clean() {
        print_success("Copy finished without errors.");
    } else {
        print_warn(&format!("Copy finished with {} error(s).", stats.errors));
    }
}
