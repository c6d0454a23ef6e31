//! Core library for `flatcopy`.
//!
//! Collects source files from a project tree into one flat directory:
//! the destination is wiped, the tree is walked, every file is checked against
//! directory/extension/name rules, and survivors are copied with their
//! timestamps under a collision-free name.
//!
//! ```no_run
//! use flatcopy::{run_copy, Config};
//!
//! let cfg = Config::new("./backend", "./flat")
//!     .with_extensions([".ts", ".json"])
//!     .with_excluded_dirs(["node_modules"]);
//! let stats = run_copy(&cfg)?;
//! println!("copied {} files", stats.copied);
//! # Ok::<(), flatcopy::FlatCopyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod pipeline;
pub mod platform;
pub mod stats;

pub use config::{
    create_template_config, default_config_path, default_log_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor, Config, LogLevel,
};
pub use errors::FlatCopyError;
pub use fs_ops::{
    copy_with_metadata, prepare_destination, resolve_destination, Classifier, CopyDecision,
    ScanEntry,
};
pub use pipeline::{run_copy, run_copy_with, CopyEvent};
pub use stats::{Failure, Stats};
