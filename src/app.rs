//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - generates the base dataset once
//! - runs the render pipeline
//! - prints reports/plots and writes exports

use std::io::Write;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, DatasetArgs, ExportArgs, RowsArgs, SummaryArgs};
use crate::config::DashboardConfig;
use crate::domain::{FilterSelection, FlightRecord};
use crate::error::AppError;
use crate::io::export::write_export_bytes;

pub mod pipeline;

use pipeline::{ExportRequest, render};

/// Log file used by the TUI (stderr would corrupt the alternate screen).
pub const TUI_LOG_FILE: &str = "flights.log";

/// Entry point for the `flights` binary.
pub fn run() -> Result<(), AppError> {
    // We want `flights` and `flights --seed 7` to behave like `flights tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Summary(args) => handle_summary(args),
        Command::Rows(args) => handle_rows(args),
        Command::Export(args) => handle_export(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_summary(args: SummaryArgs) -> Result<(), AppError> {
    init_logging(&args.dataset, LogTarget::Stderr)?;
    let config = config_from_args(&args.dataset, None)?;
    let selection = FilterSelection::from_raw(&args.filters.to_raw())?;
    let base = load_base(&config)?;
    let views = render(&base, &selection, ExportRequest::None)?;

    if args.json {
        let stdout = std::io::stdout();
        crate::io::views::write_views_json(stdout.lock(), &selection, &views)?;
        println!();
        return Ok(());
    }

    println!("{}", crate::report::format_summary(&selection, &views, &config));
    if args.plot {
        println!(
            "{}",
            crate::plot::render_passenger_plot(&views.passengers, args.width, args.height)
        );
        println!(
            "{}",
            crate::plot::render_movement_plot(&views.movements, args.width, args.height)
        );
    }
    println!("{}", crate::report::format_movement_table(&views.movements));
    Ok(())
}

fn handle_rows(args: RowsArgs) -> Result<(), AppError> {
    init_logging(&args.dataset, LogTarget::Stderr)?;
    let config = config_from_args(&args.dataset, None)?;
    let selection = FilterSelection::from_raw(&args.filters.to_raw())?;
    let base = load_base(&config)?;
    let views = render(&base, &selection, ExportRequest::None)?;

    let limit = if args.limit == 0 { None } else { Some(args.limit) };
    println!("{}", crate::report::format_records_table(&views.filtered, limit));
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    init_logging(&args.dataset, LogTarget::Stderr)?;
    let config = config_from_args(&args.dataset, args.out.clone())?;
    let selection = FilterSelection::from_raw(&args.filters.to_raw())?;
    let base = load_base(&config)?;
    let views = render(&base, &selection, ExportRequest::Csv)?;
    let bytes = views.csv.unwrap_or_default();

    if config.export_path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&bytes)
            .map_err(|e| AppError::io(format!("Failed to write CSV to stdout: {e}")))?;
    } else {
        write_export_bytes(&config.export_path, &bytes)?;
        info!(path = %config.export_path.display(), rows = views.filtered.len(), "wrote CSV export");
        eprintln!(
            "Wrote {} rows to {}",
            views.filtered.len(),
            config.export_path.display()
        );
    }
    Ok(())
}

fn handle_tui(args: DatasetArgs) -> Result<(), AppError> {
    init_logging(&args, LogTarget::File(TUI_LOG_FILE))?;
    let config = config_from_args(&args, None)?;
    let base = load_base(&config)?;
    crate::tui::run(&base, &config)
}

pub fn config_from_args(
    args: &DatasetArgs,
    export_path: Option<std::path::PathBuf>,
) -> Result<DashboardConfig, AppError> {
    DashboardConfig::resolve(args.seed, args.count, export_path)
}

/// Generate the immutable base dataset for this process.
pub fn load_base(config: &DashboardConfig) -> Result<Vec<FlightRecord>, AppError> {
    let base = crate::data::generate(config.seed, config.count)?;
    info!(seed = config.seed, count = base.len(), "generated base dataset");
    Ok(base)
}

#[derive(Debug, Clone, Copy)]
enum LogTarget {
    Stderr,
    File(&'static str),
}

/// Enable `tracing` output when `--verbose` or `RUST_LOG` is set.
fn init_logging(args: &DatasetArgs, target: LogTarget) -> Result<(), AppError> {
    let from_env = std::env::var("RUST_LOG").is_ok();
    if !(args.verbose || from_env) {
        return Ok(());
    }
    let filter = if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("debug")
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = std::fs::File::create(path)
                .map_err(|e| AppError::io(format!("Failed to create log file '{path}': {e}")))?;
            builder
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    result.map_err(|e| AppError::new(4, format!("Failed to initialize logging: {e}")))
}

/// Rewrite argv so `flights` defaults to `flights tui`.
///
/// Rules:
/// - `flights`                        -> `flights tui`
/// - `flights --seed 7 ...`           -> `flights tui --seed 7 ...`
/// - `flights --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "summary" | "rows" | "export" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(argv(&["flights"])), argv(&["flights", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["flights", "--seed", "7"])),
            argv(&["flights", "tui", "--seed", "7"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        let summary = argv(&["flights", "summary", "-a", "x"]);
        assert_eq!(rewrite_args(summary.clone()), summary);
        let help = argv(&["flights", "--help"]);
        assert_eq!(rewrite_args(help.clone()), help);
    }
}
