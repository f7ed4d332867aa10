//! Command-line interface.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use pawmatch::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod data;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use data::{handle_reset_command, handle_stats_command};
pub use version::{usage, version_line, VERSION};

use color_eyre::Result;
use std::io;
use std::sync::Arc;

use crate::adapters::JsonFileStore;
use crate::config::AppConfig;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage());
            Some(Ok(()))
        }
        CliCommand::Reset => Some(with_store(|store| {
            handle_reset_command(store.as_ref(), &mut io::stdout())
        })),
        CliCommand::Stats => Some(with_store(|store| {
            handle_stats_command(store, &mut io::stdout())
        })),
        CliCommand::RunTui => None,
    }
}

fn with_store(
    f: impl FnOnce(Arc<JsonFileStore>) -> crate::error::PawResult<()>,
) -> Result<()> {
    let config = AppConfig::load()?;
    let store = Arc::new(JsonFileStore::in_dir(config.data_dir()?));
    f(store)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(CliCommand::RunTui).is_none());
    }
}
