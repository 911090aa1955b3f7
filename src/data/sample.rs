//! Synthetic flight dataset generation.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Poisson;
use tracing::debug;

use crate::domain::{Airline, Airport, Category, FlightRecord, FlightStatus, Movement};
use crate::error::AppError;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_COUNT: usize = 1000;

/// Mean of the per-flight passenger distribution.
pub const PASSENGER_MEAN: f64 = 200.0;

/// First day of the default generation calendar.
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Last day (inclusive) of the default generation calendar.
pub fn default_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Generate `count` records over the default 2024 calendar.
pub fn generate(seed: u64, count: usize) -> Result<Vec<FlightRecord>, AppError> {
    generate_in_range(seed, count, default_start(), default_end())
}

/// Generate `count` records with dates drawn uniformly from `start..=end`.
pub fn generate_in_range(
    seed: u64,
    count: usize,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<FlightRecord>, AppError> {
    if start > end {
        return Err(AppError::invalid_range(start, end));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    sample_records(&mut rng, count, start, end)
}

fn sample_records(
    rng: &mut StdRng,
    count: usize,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<FlightRecord>, AppError> {
    let span_days = (end - start).num_days();
    let passengers = Poisson::new(PASSENGER_MEAN)
        .map_err(|e| AppError::new(4, format!("Passenger distribution error: {e}")))?;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        // Draw order is fixed: date, airport, airline, movement, status, passengers.
        let date = start + Duration::days(rng.gen_range(0..=span_days));
        let airport = pick(rng, Airport::ALL);
        let airline = pick(rng, Airline::ALL);
        let movement = pick(rng, Movement::ALL);
        let status = pick(rng, FlightStatus::ALL);
        let passengers = passengers.sample(rng) as u32;

        records.push(FlightRecord {
            date,
            airport,
            airline,
            movement,
            status,
            passengers,
        });
    }

    debug!(count, %start, %end, "generated synthetic flights");
    Ok(records)
}

fn pick<T: Copy>(rng: &mut StdRng, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_dataset() {
        let a = generate(42, 1000).unwrap();
        let b = generate(42, 1000).unwrap();
        assert_eq!(a.len(), 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_changes_dataset() {
        assert_ne!(generate(1, 200).unwrap(), generate(2, 200).unwrap());
    }

    #[test]
    fn shorter_count_is_prefix_of_longer() {
        // Each record consumes the same draws, so the sequence is count-stable.
        let short = generate(7, 10).unwrap();
        let long = generate(7, 50).unwrap();
        assert_eq!(short[..], long[..10]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate(42, 0).unwrap().is_empty());
    }

    #[test]
    fn dates_stay_within_calendar() {
        let data = generate(42, 1000).unwrap();
        assert!(data.iter().all(|r| r.date >= default_start() && r.date <= default_end()));
    }

    #[test]
    fn every_category_is_sampled() {
        let data = generate(42, 1000).unwrap();
        for a in Airport::ALL {
            assert!(data.iter().any(|r| r.airport == *a));
        }
        for a in Airline::ALL {
            assert!(data.iter().any(|r| r.airline == *a));
        }
        for m in Movement::ALL {
            assert!(data.iter().any(|r| r.movement == *m));
        }
        for s in FlightStatus::ALL {
            assert!(data.iter().any(|r| r.status == *s));
        }
    }

    #[test]
    fn passenger_mean_is_near_two_hundred() {
        let data = generate(42, 1000).unwrap();
        let mean = data.iter().map(|r| r.passengers as f64).sum::<f64>() / data.len() as f64;
        // Std error of the mean is sqrt(200/1000) ~ 0.45.
        assert!((mean - PASSENGER_MEAN).abs() < 5.0, "mean was {mean:.2}");
    }

    #[test]
    fn custom_range_is_respected_and_validated() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let data = generate_in_range(9, 100, start, end).unwrap();
        assert!(data.iter().all(|r| r.date == start || r.date == end));

        let err = generate_in_range(9, 10, end, start).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidRange);
    }
}
