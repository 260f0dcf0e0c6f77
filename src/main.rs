//! Bahamut Scanner entry point.
//!
//! Parses the command line, hands the result to the dispatcher, and turns
//! the dispatcher's outcome into a process exit code. Fatal startup errors
//! go to stderr with exit code 1; the dispatcher itself never exits.

use std::io::stdout;
use std::process::ExitCode;

use color_eyre::Result;

mod cli;
mod constants;
mod core;
mod theme;

use cli::args::ParsedArgs;
use cli::dispatch;
use theme::Theme;

fn main() -> ExitCode {
    match try_main() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(report) => {
            eprintln!("{} {report:#}", constants::MSG_FATAL_PREFIX);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<dispatch::Outcome> {
    color_eyre::install()?;

    let args = ParsedArgs::from_env()?;
    let theme = Theme::auto();

    dispatch::run(&args, &mut stdout().lock(), &theme)
}
