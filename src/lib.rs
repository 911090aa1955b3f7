//! `flight-dash` library crate.
//!
//! The binary (`flights`) is a thin wrapper around this library so that:
//!
//! - the generator, filters and aggregations are testable without spawning processes
//! - the CLI and the TUI share one render pipeline
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod query;
pub mod report;
pub mod tui;
