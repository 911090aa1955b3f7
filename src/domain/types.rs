//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - held in the immutable base dataset
//! - exported to CSV (column names and enum labels match the dashboard)
//! - dumped as JSON views

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed set of dashboard categories (airport, airline, ...).
///
/// Every category has a long `label` (what the dashboard shows and the CSV
/// export carries) and a short `code` accepted on the command line.
pub trait Category: Copy + PartialEq + Sized + 'static {
    /// Field name used in error messages and headers.
    const FIELD: &'static str;
    /// All members in declaration order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn code(self) -> &'static str;

    /// Parse either the label or the code (case-insensitive).
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(raw) || c.code().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Airport {
    #[serde(rename = "Aeroporto X")]
    X,
    #[serde(rename = "Aeroporto Y")]
    Y,
    #[serde(rename = "Aeroporto Z")]
    Z,
}

impl Category for Airport {
    const FIELD: &'static str = "airport";
    const ALL: &'static [Self] = &[Airport::X, Airport::Y, Airport::Z];

    fn label(self) -> &'static str {
        match self {
            Airport::X => "Aeroporto X",
            Airport::Y => "Aeroporto Y",
            Airport::Z => "Aeroporto Z",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Airport::X => "x",
            Airport::Y => "y",
            Airport::Z => "z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Airline {
    #[serde(rename = "Companhia A")]
    A,
    #[serde(rename = "Companhia B")]
    B,
    #[serde(rename = "Companhia C")]
    C,
}

impl Category for Airline {
    const FIELD: &'static str = "airline";
    const ALL: &'static [Self] = &[Airline::A, Airline::B, Airline::C];

    fn label(self) -> &'static str {
        match self {
            Airline::A => "Companhia A",
            Airline::B => "Companhia B",
            Airline::C => "Companhia C",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Airline::A => "a",
            Airline::B => "b",
            Airline::C => "c",
        }
    }
}

/// Arrival or departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Movement {
    #[serde(rename = "Chegada")]
    Arrival,
    #[serde(rename = "Partida")]
    Departure,
}

impl Category for Movement {
    const FIELD: &'static str = "movement";
    const ALL: &'static [Self] = &[Movement::Arrival, Movement::Departure];

    fn label(self) -> &'static str {
        match self {
            Movement::Arrival => "Chegada",
            Movement::Departure => "Partida",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Movement::Arrival => "arrival",
            Movement::Departure => "departure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightStatus {
    #[serde(rename = "Atrasado")]
    Delayed,
    #[serde(rename = "No Horário")]
    OnTime,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl Category for FlightStatus {
    const FIELD: &'static str = "status";
    const ALL: &'static [Self] = &[
        FlightStatus::Delayed,
        FlightStatus::OnTime,
        FlightStatus::Cancelled,
    ];

    fn label(self) -> &'static str {
        match self {
            FlightStatus::Delayed => "Atrasado",
            FlightStatus::OnTime => "No Horário",
            FlightStatus::Cancelled => "Cancelado",
        }
    }

    fn code(self) -> &'static str {
        match self {
            FlightStatus::Delayed => "delayed",
            FlightStatus::OnTime => "on-time",
            FlightStatus::Cancelled => "cancelled",
        }
    }
}

macro_rules! category_str_impls {
    ($($ty:ty),* $(,)?) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Category>::parse(s)
                    .ok_or_else(|| crate::error::AppError::invalid_filter_value(<$ty as Category>::FIELD, s))
            }
        }
    )*};
}

category_str_impls!(Airport, Airline, Movement, FlightStatus);

/// One row of the base dataset.
///
/// Serde names follow the dashboard's CSV export header:
/// `Data,Aeroporto,Companhia,Tipo,Status,Passageiros`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "Data")]
    pub date: NaiveDate,
    #[serde(rename = "Aeroporto")]
    pub airport: Airport,
    #[serde(rename = "Companhia")]
    pub airline: Airline,
    #[serde(rename = "Tipo")]
    pub movement: Movement,
    #[serde(rename = "Status")]
    pub status: FlightStatus,
    #[serde(rename = "Passageiros")]
    pub passengers: u32,
}

/// Passenger total for one date (sparse over dates present).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPassengers {
    pub date: NaiveDate,
    pub passengers: u64,
}

/// Arrival/departure counts for one date (both always present, zero-filled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMovements {
    pub date: NaiveDate,
    pub arrivals: usize,
    pub departures: usize,
}

impl DailyMovements {
    pub fn total(&self) -> usize {
        self.arrivals + self.departures
    }
}
