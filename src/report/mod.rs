//! Reporting utilities: formatted terminal output for the CLI subcommands.

pub mod format;

pub use format::*;
