//! Core module root.

pub mod scanner;
