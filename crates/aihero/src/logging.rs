//! Log setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const FILTER_VAR: &str = "AIHERO_LOG";

/// Install the global subscriber writing to `path` or the default log file.
///
/// Returns the log file in use; without any usable location logging stays
/// disabled.
pub fn init(path: Option<&Path>) -> color_eyre::Result<Option<PathBuf>> {
    let Some(path) = path
        .map(Path::to_path_buf)
        .or_else(aihero_config::default_log_path)
    else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}
