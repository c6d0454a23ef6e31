//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FLATCOPY_CONFIG";

pub const SOURCE_DIR_DEFAULT: &str = "./backend";
pub const DEST_DIR_DEFAULT: &str = "./delete_backend";

pub const FILE_EXTENSIONS_DEFAULT: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".sql", ".py", ".java", ".cs", ".html", ".css", ".scss",
    ".json", ".yaml", ".yml", ".md",
];

pub const EXCLUDED_DIRS_DEFAULT: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "target",
    "out",
    "bin",
    "obj",
    ".git",
    ".svn",
    ".vscode",
    ".idea",
    "venv",
    "__pycache__",
];

pub const EXCLUDED_PATTERNS_DEFAULT: &[&str] = &[".d.ts", ".min.js", ".log", "package-lock.json"];

pub const INCLUDE_SPECIFIC_FILES_DEFAULT: &[&str] = &[
    "Dockerfile",
    ".dockerignore",
    "docker-compose.yml",
    "docker-compose.yaml",
    "dockerfile",
];
