//! Command-line argument definitions.
//!
//! The clap surface is kept behind [`ParsedArgs`], a narrow parse result the
//! dispatcher consumes. Dispatch logic never touches clap types directly, so
//! tests can build `ParsedArgs` values by hand.

use clap::Parser;

use crate::constants;

/// Bahamut Scanner - Command-line vulnerability scanner
///
/// Automatic help/version handling is disabled: the program renders its own
/// help menu (also for a bare `help` positional and for an empty command
/// line) and its own version line.
#[derive(Parser, Debug)]
#[command(
    name = constants::APP_NAME,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct RawArgs {
    /// Show the help menu
    #[arg(short = 'h', long)]
    help: bool,

    /// Show the version number
    #[arg(long)]
    version: bool,

    /// Target URL to scan
    #[arg(long, value_name = "url")]
    target: Option<String>,

    /// Enable verbose mode
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Leading positional tokens (e.g. a bare `help` command)
    #[arg(value_name = "COMMAND")]
    positionals: Vec<String>,
}

/// Narrow parse result handed to the dispatcher.
///
/// Mirrors what the dispatcher actually needs: flag presence, the target
/// value, leading positionals, and whether the command line was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `-h` or `--help` was supplied.
    pub help: bool,
    /// `--version` was supplied.
    pub version: bool,
    /// Value of `--target`, if any.
    pub target: Option<String>,
    /// `-v` or `--verbose` was supplied.
    pub verbose: bool,
    /// Positional tokens in command-line order.
    pub positionals: Vec<String>,
    /// No arguments at all were supplied.
    pub no_args: bool,
}

impl ParsedArgs {
    /// Parse the process command line.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for malformed input (unknown flags, missing
    /// option values). The caller treats that as a fatal startup error.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_from_iter(std::env::args())
    }

    /// Parse an explicit argument list. The first item is the program name.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for malformed input.
    pub fn try_from_iter<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let no_args = argv.len() <= 1;
        let raw = RawArgs::try_parse_from(&argv)?;

        Ok(Self {
            help: raw.help,
            version: raw.version,
            target: raw.target,
            verbose: raw.verbose,
            positionals: raw.positionals,
            no_args,
        })
    }
}
