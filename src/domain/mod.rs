//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the category enums (`Airport`, `Airline`, `Movement`, `FlightStatus`)
//! - the base dataset row (`FlightRecord`)
//! - the aggregated view rows (`DailyPassengers`, `DailyMovements`)
//! - the validated filter selection (`FilterSelection`, `DateRange`)

pub mod selection;
pub mod types;

pub use selection::*;
pub use types::*;
