//! Command-line interface module.
//!
//! Provides argument parsing and the dispatch logic that selects one of the
//! program's output modes (help, version, error, scan).

pub mod args;
pub mod commands;
pub mod dispatch;
