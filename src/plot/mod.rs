//! Terminal plots for the non-interactive subcommands.

pub mod ascii;

pub use ascii::{render_movement_plot, render_passenger_plot};
