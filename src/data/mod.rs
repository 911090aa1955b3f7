//! Data sources.
//!
//! The dashboard has no real ingestion: the base dataset is synthetic and
//! reproducible from a seed.

pub mod sample;

pub use sample::{DEFAULT_COUNT, DEFAULT_SEED, generate, generate_in_range};
