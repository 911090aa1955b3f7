//! Input/output helpers.
//!
//! - CSV export of filtered records (`export`)
//! - JSON dump of the dashboard views (`views`)

pub mod export;
pub mod views;

pub use export::*;
pub use views::*;
