//! Command-line parsing for the flight dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the pipeline code. Filter values arrive as raw strings and are
//! validated by `FilterSelection::from_raw`, so the CLI and the TUI share one
//! boundary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::RawFilters;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "flights", version, about = "Synthetic flight dashboard (filters, daily views, CSV export)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print totals and the daily movement table; optionally plot or dump JSON.
    Summary(SummaryArgs),
    /// Print the filtered records table.
    Rows(RowsArgs),
    /// Write the filtered records as CSV.
    Export(ExportArgs),
    /// Launch the interactive dashboard.
    ///
    /// This uses the same underlying render pipeline as `flights summary`, but
    /// renders results in a terminal UI using Ratatui.
    Tui(DatasetArgs),
}

/// Options controlling the synthetic base dataset.
#[derive(Debug, Args, Clone, Default)]
pub struct DatasetArgs {
    /// Random seed for dataset generation [env: FLIGHTS_SEED, default: 42].
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of synthetic flights to generate [env: FLIGHTS_COUNT, default: 1000].
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Log to stderr (or `flights.log` for the TUI). `RUST_LOG` also enables logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Filter flags. Each accepts a label ("Aeroporto X"), a short code ("x"),
/// or "Todos"/"all" for no filter.
#[derive(Debug, Args, Clone, Default)]
pub struct FilterArgs {
    /// Airport: x, y, z.
    #[arg(short = 'a', long)]
    pub airport: Option<String>,

    /// Airline: a, b, c.
    #[arg(short = 'c', long)]
    pub airline: Option<String>,

    /// Movement type: arrival, departure.
    #[arg(short = 't', long = "type")]
    pub movement: Option<String>,

    /// Status: delayed, on-time, cancelled.
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// First date to include (YYYY-MM-DD or DD/MM/YYYY).
    #[arg(long)]
    pub start: Option<String>,

    /// Last date to include (YYYY-MM-DD or DD/MM/YYYY).
    #[arg(long)]
    pub end: Option<String>,
}

impl FilterArgs {
    pub fn to_raw(&self) -> RawFilters {
        RawFilters {
            airport: self.airport.clone(),
            airline: self.airline.clone(),
            movement: self.movement.clone(),
            status: self.status.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Render ASCII plots of both daily views.
    #[arg(long)]
    pub plot: bool,

    /// Print the views as JSON instead of text.
    #[arg(long, conflicts_with = "plot")]
    pub json: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[derive(Debug, Args, Clone)]
pub struct RowsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of rows to print (0 prints all).
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output path, or `-` for stdout [env: FLIGHTS_EXPORT, default: dados_voos.csv].
    #[arg(short, long, value_name = "CSV")]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_summary_filters() {
        let cli = Cli::try_parse_from([
            "flights", "summary", "-a", "x", "--type", "arrival", "--start", "2024-03-01", "--plot",
        ])
        .unwrap();
        let Command::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(args.filters.airport.as_deref(), Some("x"));
        assert_eq!(args.filters.movement.as_deref(), Some("arrival"));
        assert_eq!(args.filters.start.as_deref(), Some("2024-03-01"));
        assert!(args.plot);
        assert_eq!(args.dataset.seed, None);
    }

    #[test]
    fn json_conflicts_with_plot() {
        assert!(Cli::try_parse_from(["flights", "summary", "--plot", "--json"]).is_err());
    }

    #[test]
    fn export_accepts_out_and_seed() {
        let cli = Cli::try_parse_from(["flights", "export", "--seed", "9", "-o", "-"]).unwrap();
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.dataset.seed, Some(9));
        assert_eq!(args.out, Some(PathBuf::from("-")));
    }

    #[test]
    fn definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
