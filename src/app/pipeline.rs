//! Shared "render pipeline" used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! filter -> daily passengers -> daily movements -> optional CSV export
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use serde::Serialize;
use tracing::debug;

use crate::domain::{DailyMovements, DailyPassengers, FilterSelection, FlightRecord};
use crate::error::AppError;
use crate::io::export::export_csv;
use crate::query::{aggregate_movements_by_date, aggregate_passengers_by_date, apply_filters};

/// Whether the caller wants the CSV bytes alongside the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRequest {
    None,
    Csv,
}

/// All computed outputs of a single render pass.
#[derive(Debug, Clone)]
pub struct DashboardViews {
    pub filtered: Vec<FlightRecord>,
    pub passengers: Vec<DailyPassengers>,
    pub movements: Vec<DailyMovements>,
    pub csv: Option<Vec<u8>>,
}

/// Headline numbers for the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub records: usize,
    pub passengers: u64,
    pub arrivals: usize,
    pub departures: usize,
    pub days: usize,
}

impl DashboardViews {
    pub fn totals(&self) -> Totals {
        Totals {
            records: self.filtered.len(),
            passengers: self.passengers.iter().map(|p| p.passengers).sum(),
            arrivals: self.movements.iter().map(|m| m.arrivals).sum(),
            departures: self.movements.iter().map(|m| m.departures).sum(),
            days: self.movements.len(),
        }
    }
}

/// Run one filter pass over `base` and derive every dashboard view.
pub fn render(
    base: &[FlightRecord],
    selection: &FilterSelection,
    export: ExportRequest,
) -> Result<DashboardViews, AppError> {
    let filtered = apply_filters(base, selection);
    let passengers = aggregate_passengers_by_date(&filtered);
    let movements = aggregate_movements_by_date(&filtered);
    let csv = match export {
        ExportRequest::Csv => Some(export_csv(&filtered)?),
        ExportRequest::None => None,
    };

    debug!(
        base = base.len(),
        filtered = filtered.len(),
        days = movements.len(),
        export = csv.is_some(),
        "rendered dashboard views"
    );

    Ok(DashboardViews {
        filtered,
        passengers,
        movements,
        csv,
    })
}
