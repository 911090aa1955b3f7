//! Run configuration: flags first, then `.env` / environment, then defaults.
//!
//! Recognized variables:
//! - `FLIGHTS_SEED`   seed for the synthetic dataset
//! - `FLIGHTS_COUNT`  number of generated records
//! - `FLIGHTS_EXPORT` path of the CSV export

use std::path::PathBuf;

use crate::data::{DEFAULT_COUNT, DEFAULT_SEED};
use crate::error::{AppError, ErrorKind};
use crate::io::export::EXPORT_FILE_NAME;

pub const ENV_SEED: &str = "FLIGHTS_SEED";
pub const ENV_COUNT: &str = "FLIGHTS_COUNT";
pub const ENV_EXPORT: &str = "FLIGHTS_EXPORT";

/// Fully resolved settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub seed: u64,
    pub count: usize,
    pub export_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: DEFAULT_COUNT,
            export_path: PathBuf::from(EXPORT_FILE_NAME),
        }
    }
}

impl DashboardConfig {
    /// Resolve against the process environment (loading `.env` if present).
    pub fn resolve(
        seed: Option<u64>,
        count: Option<usize>,
        export_path: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::resolve_with(seed, count, export_path, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for environment values.
    pub fn resolve_with(
        seed: Option<u64>,
        count: Option<usize>,
        export_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let defaults = Self::default();
        let seed = match seed {
            Some(v) => v,
            None => parse_env(&lookup, ENV_SEED)?.unwrap_or(defaults.seed),
        };
        let count = match count {
            Some(v) => v,
            None => parse_env(&lookup, ENV_COUNT)?.unwrap_or(defaults.count),
        };
        let export_path = export_path
            .or_else(|| lookup(ENV_EXPORT).filter(|s| !s.trim().is_empty()).map(PathBuf::from))
            .unwrap_or(defaults.export_path);

        Ok(Self {
            seed,
            count,
            export_path,
        })
    }
}

fn parse_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| AppError::with_kind(ErrorKind::Config, format!("Invalid {key}='{raw}': {e}")))
}
