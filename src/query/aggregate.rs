//! Per-day aggregations over a filtered record set.
//!
//! Both views are keyed by the dates actually present in the input and come
//! back sorted ascending. Passenger totals are sparse; movement counts carry
//! both columns for every date, with a zero where a movement type is absent.

use std::collections::BTreeMap;

use crate::domain::{DailyMovements, DailyPassengers, FlightRecord, Movement};

/// Sum passengers per date.
pub fn aggregate_passengers_by_date(filtered: &[FlightRecord]) -> Vec<DailyPassengers> {
    let mut by_date = BTreeMap::new();
    for r in filtered {
        *by_date.entry(r.date).or_insert(0u64) += u64::from(r.passengers);
    }
    by_date
        .into_iter()
        .map(|(date, passengers)| DailyPassengers { date, passengers })
        .collect()
}

/// Count arrivals and departures per date.
pub fn aggregate_movements_by_date(filtered: &[FlightRecord]) -> Vec<DailyMovements> {
    let mut by_date = BTreeMap::new();
    for r in filtered {
        let row = by_date.entry(r.date).or_insert(DailyMovements {
            date: r.date,
            arrivals: 0,
            departures: 0,
        });
        match r.movement {
            Movement::Arrival => row.arrivals += 1,
            Movement::Departure => row.departures += 1,
        }
    }
    by_date.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::data::generate;
    use crate::domain::{Airline, Airport, DateRange, FilterSelection, FlightStatus};
    use crate::query::apply_filters;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(date: NaiveDate, airport: Airport, movement: Movement, passengers: u32) -> FlightRecord {
        FlightRecord {
            date,
            airport,
            airline: Airline::A,
            movement,
            status: FlightStatus::OnTime,
            passengers,
        }
    }

    #[test]
    fn passenger_series_sums_per_date_sorted() {
        let records = vec![
            rec(d(2024, 3, 2), Airport::X, Movement::Arrival, 10),
            rec(d(2024, 3, 1), Airport::Y, Movement::Arrival, 5),
            rec(d(2024, 3, 2), Airport::Z, Movement::Departure, 7),
        ];
        let series = aggregate_passengers_by_date(&records);
        assert_eq!(
            series,
            vec![
                DailyPassengers { date: d(2024, 3, 1), passengers: 5 },
                DailyPassengers { date: d(2024, 3, 2), passengers: 17 },
            ]
        );
    }

    #[test]
    fn airport_filter_then_movement_table_is_zero_filled() {
        let base = vec![
            rec(d(2024, 3, 2), Airport::X, Movement::Departure, 120),
            rec(d(2024, 3, 1), Airport::X, Movement::Arrival, 200),
            rec(d(2024, 3, 1), Airport::Y, Movement::Departure, 180),
            rec(d(2024, 3, 1), Airport::X, Movement::Departure, 210),
            rec(d(2024, 3, 2), Airport::Z, Movement::Arrival, 190),
            rec(d(2024, 3, 1), Airport::X, Movement::Arrival, 195),
        ];
        let sel = FilterSelection {
            airport: Some(Airport::X),
            ..FilterSelection::default()
        };
        let table = aggregate_movements_by_date(&apply_filters(&base, &sel));
        assert_eq!(
            table,
            vec![
                DailyMovements { date: d(2024, 3, 1), arrivals: 2, departures: 1 },
                DailyMovements { date: d(2024, 3, 2), arrivals: 0, departures: 1 },
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_views() {
        assert!(aggregate_passengers_by_date(&[]).is_empty());
        assert!(aggregate_movements_by_date(&[]).is_empty());
    }

    #[test]
    fn passengers_are_conserved() {
        let base = generate(42, 1000).unwrap();
        let sel = FilterSelection {
            status: Some(FlightStatus::Delayed),
            ..FilterSelection::default()
        };
        let filtered = apply_filters(&base, &sel);
        let from_series: u64 = aggregate_passengers_by_date(&filtered).iter().map(|p| p.passengers).sum();
        let from_records: u64 = filtered.iter().map(|r| u64::from(r.passengers)).sum();
        assert_eq!(from_series, from_records);
    }

    #[test]
    fn movement_rows_account_for_every_record() {
        let base = generate(42, 1000).unwrap();
        let filtered = apply_filters(&base, &FilterSelection::default());
        let table = aggregate_movements_by_date(&filtered);

        for row in &table {
            let on_date = filtered.iter().filter(|r| r.date == row.date).count();
            assert_eq!(row.total(), on_date);
        }
        assert!(table.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(table.iter().map(DailyMovements::total).sum::<usize>(), filtered.len());
    }

    #[test]
    fn views_share_the_same_dates() {
        let base = generate(3, 400).unwrap();
        let sel = FilterSelection {
            airline: Some(Airline::C),
            date_range: DateRange::new(Some(d(2024, 6, 1)), None).unwrap(),
            ..FilterSelection::default()
        };
        let filtered = apply_filters(&base, &sel);
        let p: Vec<_> = aggregate_passengers_by_date(&filtered).iter().map(|x| x.date).collect();
        let m: Vec<_> = aggregate_movements_by_date(&filtered).iter().map(|x| x.date).collect();
        assert_eq!(p, m);
    }

    #[test]
    fn range_outside_calendar_gives_empty_views() {
        let base = generate(42, 1000).unwrap();
        let sel = FilterSelection {
            date_range: DateRange::new(Some(d(2023, 1, 1)), Some(d(2023, 12, 31))).unwrap(),
            ..FilterSelection::default()
        };
        let filtered = apply_filters(&base, &sel);
        assert!(filtered.is_empty());
        assert!(aggregate_passengers_by_date(&filtered).is_empty());
        assert!(aggregate_movements_by_date(&filtered).is_empty());
    }
}
