//! The filter-aggregate pipeline.
//!
//! Every function here is a pure transform over a borrowed slice of records
//! and returns a freshly allocated collection; the base dataset is never touched.

pub mod aggregate;
pub mod filter;

pub use aggregate::{aggregate_movements_by_date, aggregate_passengers_by_date};
pub use filter::apply_filters;
