//! JSON dump of the dashboard views.
//!
//! The JSON document is the portable form of what the dashboard charts show:
//! - headline totals
//! - the daily passenger series
//! - the daily movement table
//! - the selection that produced them

use std::io::Write;

use serde::Serialize;

use crate::app::pipeline::{DashboardViews, Totals};
use crate::domain::{DailyMovements, DailyPassengers, FilterSelection};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ViewsDocument<'a> {
    pub tool: &'static str,
    pub selection: &'a FilterSelection,
    pub totals: Totals,
    pub passengers: &'a [DailyPassengers],
    pub movements: &'a [DailyMovements],
}

impl<'a> ViewsDocument<'a> {
    pub fn new(selection: &'a FilterSelection, views: &'a DashboardViews) -> Self {
        Self {
            tool: "flights",
            selection,
            totals: views.totals(),
            passengers: &views.passengers,
            movements: &views.movements,
        }
    }
}

/// Write the views as pretty JSON.
pub fn write_views_json<W: Write>(
    writer: W,
    selection: &FilterSelection,
    views: &DashboardViews,
) -> Result<(), AppError> {
    serde_json::to_writer_pretty(writer, &ViewsDocument::new(selection, views))
        .map_err(|e| AppError::io(format!("Failed to write views JSON: {e}")))
}
