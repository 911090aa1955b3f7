//! Filter selection and its boundary parsing.
//!
//! Everything past this module works on validated values: unknown category
//! names, malformed dates and inverted ranges are rejected here.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Airline, Airport, Category, FlightStatus, Movement};
use crate::error::AppError;

/// Label shown for a wildcard slot (matches every value).
pub const WILDCARD_LABEL: &str = "Todos";

/// Date formats accepted at the boundary: ISO first, then the `DD/MM/YYYY`
/// display format of the dashboard's date picker.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Inclusive date range with optional bounds.
///
/// The constructor guarantees `start <= end` when both are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, AppError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(AppError::invalid_range(s, e));
            }
        }
        Ok(Self { start, end })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// The user's current filter choices. `None` is a wildcard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub airport: Option<Airport>,
    pub airline: Option<Airline>,
    pub movement: Option<Movement>,
    pub status: Option<FlightStatus>,
    pub date_range: DateRange,
}

impl FilterSelection {
    /// True when every slot is a wildcard and the date range is unbounded.
    pub fn is_empty(&self) -> bool {
        self.airport.is_none()
            && self.airline.is_none()
            && self.movement.is_none()
            && self.status.is_none()
            && self.date_range.is_unbounded()
    }

    /// Validate raw user input into a selection.
    pub fn from_raw(raw: &RawFilters) -> Result<Self, AppError> {
        let start = parse_optional_date("start date", raw.start.as_deref())?;
        let end = parse_optional_date("end date", raw.end.as_deref())?;
        Ok(Self {
            airport: parse_category(raw.airport.as_deref())?,
            airline: parse_category(raw.airline.as_deref())?,
            movement: parse_category(raw.movement.as_deref())?,
            status: parse_category(raw.status.as_deref())?,
            date_range: DateRange::new(start, end)?,
        })
    }
}

/// Unvalidated filter strings as collected by a shell (CLI flags, TUI input).
#[derive(Debug, Clone, Default)]
pub struct RawFilters {
    pub airport: Option<String>,
    pub airline: Option<String>,
    pub movement: Option<String>,
    pub status: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

pub fn is_wildcard(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw == "*" || raw.eq_ignore_ascii_case(WILDCARD_LABEL) || raw.eq_ignore_ascii_case("all")
}

/// Parse one category slot; wildcards map to `None`.
pub fn parse_category<T: Category>(raw: Option<&str>) -> Result<Option<T>, AppError> {
    match raw {
        None => Ok(None),
        Some(s) if is_wildcard(s) => Ok(None),
        Some(s) => T::parse(s)
            .map(Some)
            .ok_or_else(|| AppError::invalid_filter_value(T::FIELD, s)),
    }
}

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| AppError::invalid_filter_value(field, raw))
}

fn parse_optional_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match raw {
        Some(s) if !s.trim().is_empty() => parse_date(field, s).map(Some),
        _ => Ok(None),
    }
}

/// Label for an optional slot, `Todos` for the wildcard.
pub fn slot_label<T: Category>(value: Option<T>) -> &'static str {
    value.map(Category::label).unwrap_or(WILDCARD_LABEL)
}
