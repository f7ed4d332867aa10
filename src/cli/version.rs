//! `--version` and `--help` output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("pawmatch {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}\n\n\
         Usage: pawmatch [OPTIONS]\n\n\
         Options:\n  \
           --stats        Print swipe statistics and exit\n  \
           --reset        Clear stored swipes, matches, filters and session\n  \
           -V, --version  Print version\n  \
           -h, --help     Print this help\n\n\
         Environment:\n  \
           PAWMATCH_HOME  Data directory (default: ~/.pawmatch)\n  \
           PAWMATCH_LOG   Log filter (default: pawmatch=info)",
        version_line()
    )
}
