//! Tracing subscriber setup.
//!
//! The terminal belongs to the TUI, so events go to `<data_dir>/pawmatch.log`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{StoreError, StoreResult};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "PAWMATCH_LOG";
pub const DEFAULT_DIRECTIVES: &str = "pawmatch=info";
pub const LOG_FILE: &str = "pawmatch.log";

/// Filter from `PAWMATCH_LOG`, or `pawmatch=info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber, appending to the log file in `data_dir`.
///
/// Returns the log path. A subscriber installed earlier is left in place.
pub fn init(data_dir: &Path) -> StoreResult<PathBuf> {
    crate::storage::ensure_data_dir(data_dir)?;
    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|err| StoreError::io("open", &path, err))?;

    let installed = fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "pawmatch starting");
    }
    Ok(path)
}
