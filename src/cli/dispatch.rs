//! Argument dispatcher.
//!
//! Selects one of the program's mutually exclusive output modes (help,
//! version, missing-target error, scan) from a [`ParsedArgs`] value. The
//! dispatcher never terminates the process: it writes to an injected sink
//! and returns an [`Outcome`] that `main` translates into an exit code.

use std::io::Write;

use color_eyre::Result;

use crate::cli::args::ParsedArgs;
use crate::cli::commands;
use crate::constants;
use crate::core::scanner::{self, ScanConfig, ScanStatus};
use crate::theme::Theme;

/// Program action decided from the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the help menu.
    ShowHelp,
    /// Print the version line.
    ShowVersion,
    /// Run a scan with the given configuration.
    Scan(ScanConfig),
}

/// Final outcome of one invocation, translated to a process exit code by
/// the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Help, version, or a completed scan.
    Success,
    /// `--target` was absent or empty.
    MissingTarget,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::MissingTarget => 1,
        }
    }
}

/// Decide the program action. First match wins; help outranks everything,
/// including a supplied `--target`.
pub fn decide(args: &ParsedArgs) -> Action {
    let help_positional = args.positionals.first().is_some_and(|p| p == "help");
    if args.help || help_positional || args.no_args {
        return Action::ShowHelp;
    }

    if args.version {
        return Action::ShowVersion;
    }

    Action::Scan(ScanConfig::new(args.target.clone(), args.verbose))
}

/// Decide and execute, writing all output to `out`.
///
/// # Errors
///
/// Only I/O errors from the sink propagate; those are fatal startup errors
/// for the caller.
pub fn run<W: Write>(args: &ParsedArgs, out: &mut W, theme: &Theme) -> Result<Outcome> {
    match decide(args) {
        Action::ShowHelp => {
            write!(out, "{}", commands::help_text())?;
            Ok(Outcome::Success)
        }
        Action::ShowVersion => {
            writeln!(out, "{}", commands::version_line())?;
            Ok(Outcome::Success)
        }
        Action::Scan(config) => scan(&config, out, theme),
    }
}

/// Execute the scan path: banner, target validation, optional diagnostic
/// echo, then the scan itself.
fn scan<W: Write>(config: &ScanConfig, out: &mut W, theme: &Theme) -> Result<Outcome> {
    writeln!(out, "{}", commands::version_line())?;

    if !config.has_target() {
        writeln!(out, "{}", theme.error(constants::MSG_TARGET_REQUIRED))?;
        writeln!(out, "{}", theme.hint(constants::MSG_HELP_HINT))?;
        return Ok(Outcome::MissingTarget);
    }

    if config.verbose {
        let echo = format!("{}{}", constants::MSG_INPUT_PREFIX, config.target);
        writeln!(out, "{}", theme.hint(&echo))?;
    }

    match scanner::run_scan(config) {
        ScanStatus::Complete => {
            writeln!(out, "{}", theme.success(constants::MSG_SCAN_COMPLETE))?;
            Ok(Outcome::Success)
        }
    }
}
