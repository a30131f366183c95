//! Default file locations.
//!
//! All paths are relative to the project root's `data/` directory.

use std::path::{Path, PathBuf};

/// File name of the optional configuration file in the project root.
pub const CONFIG_FILE_NAME: &str = "trends.toml";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`. Falls back to the
/// current directory if the manifest directory is not nested as expected.
#[must_use]
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Returns the `data/` directory path.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_root().join("data")
}

/// Returns the default configuration file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    project_root().join(CONFIG_FILE_NAME)
}
