//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Forget swipes, matches, filters and the session
    Reset,
    /// Print swipe statistics
    Stats,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the command to run.
///
/// The first recognised flag wins; unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use pawmatch::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pawmatch".to_string(), "--stats".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Stats);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--reset" => return CliCommand::Reset,
            "--stats" => return CliCommand::Stats,
            _ => {}
        }
    }
    CliCommand::RunTui
}
