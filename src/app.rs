//! Application orchestrator.
//! Handles the config subcommands, merges config with CLI flags, initializes
//! logging, runs the copy and prints the per-file lines and the summary.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, error};

use flatcopy::cli::Args;
use flatcopy::output as out;
use flatcopy::{
    create_template_config, default_config_path, load_config, run_copy_with, CopyDecision,
    CopyEvent, FlatCopyError, LogLevel,
};

use crate::logging::init_tracing;

fn config_location(args: &Args) -> Result<PathBuf> {
    match &args.config {
        Some(p) => Ok(p.clone()),
        None => default_config_path(),
    }
}

fn report_event(event: &CopyEvent<'_>, show_skips: bool) {
    match event {
        CopyEvent::Copied {
            relative,
            dest,
            renamed,
        } => {
            let name = dest.file_name().unwrap_or_default().to_string_lossy();
            let label = if *renamed { "Copied (renamed)" } else { "Copied" };
            out::print_user(&format!("{label}: {} -> {name}", relative.display()));
        }
        CopyEvent::Failed { relative, error } => {
            out::print_warn(&format!("{}: {error}", relative.display()));
        }
        CopyEvent::Skipped { relative, decision } if show_skips => {
            let reason = match decision {
                CopyDecision::SkipDirExcluded => "excluded directory",
                CopyDecision::SkipTypeMismatch => "type mismatch",
                CopyDecision::SkipPatternExcluded => "excluded pattern",
                CopyDecision::Copy => return,
            };
            out::print_user(&format!("Skipped ({reason}): {}", relative.display()));
        }
        CopyEvent::Skipped { .. } => {}
    }
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config subcommands run before logging init.
    if args.print_config {
        let path = config_location(&args)?;
        out::print_info(&format!("flatcopy config path:\n  {}", path.display()));
        if path.exists() {
            out::print_info("A config file exists at that location.");
        } else {
            out::print_info("No config file exists there yet. Run with --init-config to create a template.");
        }
        return Ok(());
    }

    if args.init_config {
        let path = config_location(&args)?;
        create_template_config(&path)?;
        out::print_success(&format!("A template flatcopy config was written to: {}", path.display()));
        out::print_info("Edit source_dir, dest_dir and the filter lists, then re-run without --init-config.");
        return Ok(());
    }

    let mut cfg = load_config(args.config.as_deref()).context("loading configuration")?;
    args.apply_overrides(&mut cfg);

    let guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    debug!(?args, "Starting flatcopy");

    let show_skips = matches!(cfg.log_level, LogLevel::Info | LogLevel::Debug);
    let result = run_copy_with(&cfg, |ev| report_event(ev, show_skips));

    let outcome = match result {
        Ok(stats) => {
            out::print_summary(&stats);
            Ok(())
        }
        Err(e) => {
            log_fatal(&e);
            Err(anyhow::Error::new(e))
        }
    };

    // Flush the file appender before exit.
    drop(guard);
    outcome
}

fn log_fatal(e: &FlatCopyError) {
    let code = e.code();
    let kind = e.kind();
    match e {
        FlatCopyError::ConfigInvalid { path, reason } => {
            error!(code, kind, path = %path.display(), %reason, "Invalid configuration")
        }
        FlatCopyError::PermissionDenied { op, path, .. } => {
            error!(code, kind, op, path = %path.display(), "Permission denied")
        }
        FlatCopyError::IoFailure { op, path, .. } => {
            error!(code, kind, op, path = %path.display(), error = %e, "I/O failure")
        }
        _ => error!(code, kind, error = %e, "Copy run failed"),
    }
}
