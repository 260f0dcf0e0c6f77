//! Application-wide constants and user-visible message strings.
//!
//! Every string the CLI prints lives here, so output wording is defined in
//! one place and the dispatch logic stays free of literals.

// === Application Metadata ===

/// Binary name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Human-facing product title used in the banner and version line.
pub const APP_TITLE: &str = "Bahamut Scanner";

// === Help Text ===

/// Title line of the help menu; users and tests key off this string.
pub const HELP_TITLE: &str = "Bahamut Help Menu";

// === Messages: CLI Output ===

/// Error printed when no scan target was supplied.
pub const MSG_TARGET_REQUIRED: &str = "Error: --target is required";
/// Hint printed below the missing-target error.
pub const MSG_HELP_HINT: &str = "Use -h for help";
/// Prefix of the verbose diagnostic line echoing the target.
pub const MSG_INPUT_PREFIX: &str = "Input: ";
/// Success line printed when the scan finishes.
pub const MSG_SCAN_COMPLETE: &str = "\u{2713} Scan complete";

// === Messages: Fatal Errors ===

/// Prefix for unrecoverable startup errors reported on stderr.
pub const MSG_FATAL_PREFIX: &str = "Fatal error:";
