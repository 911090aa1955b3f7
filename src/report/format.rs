//! Formatted terminal output: run summary, daily movement table, record table.
//!
//! We keep formatting code in one place so:
//! - the pipeline code stays clean and testable
//! - output changes are localized (golden tests below)

use crate::app::pipeline::DashboardViews;
use crate::config::DashboardConfig;
use crate::domain::{DailyMovements, DateRange, FilterSelection, FlightRecord, slot_label};

/// Format the run summary (dataset, active filters, headline totals).
pub fn format_summary(selection: &FilterSelection, views: &DashboardViews, config: &DashboardConfig) -> String {
    let mut out = String::new();
    let totals = views.totals();

    out.push_str("=== flights - Dashboard de Voos ===\n");
    out.push_str(&format!("Dataset: seed={} | n={}\n", config.seed, config.count));
    out.push_str(&format_filters(selection));
    out.push('\n');
    out.push_str(&format!(
        "Filtered: records={} | passengers={} | arrivals={} | departures={} | days={}\n",
        totals.records, totals.passengers, totals.arrivals, totals.departures, totals.days
    ));

    out
}

/// One-line description of the active filters.
pub fn format_filters(selection: &FilterSelection) -> String {
    format!(
        "Filters: Aeroporto={} | Tipo={} | Status={} | Companhia={} | Período={}",
        slot_label(selection.airport),
        slot_label(selection.movement),
        slot_label(selection.status),
        slot_label(selection.airline),
        format_range(&selection.date_range),
    )
}

pub fn format_range(range: &DateRange) -> String {
    let start = range.start().map(|d| d.to_string()).unwrap_or_else(|| "…".to_string());
    let end = range.end().map(|d| d.to_string()).unwrap_or_else(|| "…".to_string());
    format!("{start}..{end}")
}

/// Format the daily arrivals/departures table.
pub fn format_movement_table(rows: &[DailyMovements]) -> String {
    let mut out = String::new();
    out.push_str("Voos Diários (Entradas e Saídas):\n");
    if rows.is_empty() {
        out.push_str("(no flights match the current filters)\n");
        return out;
    }

    out.push_str(&format!("{:<10} {:>8} {:>10} {:>6}\n", "date", "arrivals", "departures", "total"));
    out.push_str(&format!("{:-<10} {:-<8} {:-<10} {:-<6}\n", "", "", "", ""));
    for r in rows {
        out.push_str(&format!(
            "{:<10} {:>8} {:>10} {:>6}\n",
            r.date.to_string(),
            r.arrivals,
            r.departures,
            r.total()
        ));
    }
    out
}

/// Format filtered records as a table, optionally truncated to `limit` rows.
pub fn format_records_table(rows: &[FlightRecord], limit: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str("Tabela de Dados Filtrados:\n");
    out.push_str(
        format!(
            "{:<10} {:<11} {:<11} {:<7} {:<10} {:>11}",
            "Data", "Aeroporto", "Companhia", "Tipo", "Status", "Passageiros"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(&format!("{:-<10} {:-<11} {:-<11} {:-<7} {:-<10} {:-<11}\n", "", "", "", "", "", ""));

    let shown = limit.unwrap_or(rows.len()).min(rows.len());
    for r in &rows[..shown] {
        out.push_str(&format!(
            "{:<10} {:<11} {:<11} {:<7} {:<10} {:>11}\n",
            r.date.to_string(),
            r.airport.to_string(),
            r.airline.to_string(),
            r.movement.to_string(),
            r.status.to_string(),
            r.passengers
        ));
    }
    if shown < rows.len() {
        out.push_str(&format!("… {} more rows\n", rows.len() - shown));
    }
    out
}
