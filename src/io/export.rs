//! Export filtered records to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts:
//! header `Data,Aeroporto,Companhia,Tipo,Status,Passageiros`, one row per record
//! in filtered order, no index column.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::FlightRecord;
use crate::error::AppError;

/// File name the dashboard offers for the download.
pub const EXPORT_FILE_NAME: &str = "dados_voos.csv";

/// Serialize records to CSV bytes.
pub fn export_csv(records: &[FlightRecord]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for r in records {
        writer
            .serialize(r)
            .map_err(|e| AppError::io(format!("Failed to serialize export CSV row: {e}")))?;
    }
    if records.is_empty() {
        // serde-driven headers are only emitted with the first row.
        writer
            .write_record(["Data", "Aeroporto", "Companhia", "Tipo", "Status", "Passageiros"])
            .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::io(format!("Failed to flush export CSV: {e}")))
}

/// Write the CSV export for `records` to `path`.
pub fn write_csv_export(path: &Path, records: &[FlightRecord]) -> Result<(), AppError> {
    let bytes = export_csv(records)?;
    write_export_bytes(path, &bytes)?;
    info!(path = %path.display(), rows = records.len(), "wrote CSV export");
    Ok(())
}

/// Write already-serialized export bytes to `path`.
pub fn write_export_bytes(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    file.write_all(bytes)
        .map_err(|e| AppError::io(format!("Failed to write export CSV '{}': {e}", path.display())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::{Airline, Airport, FlightStatus, Movement};

    fn sample_rows() -> Vec<FlightRecord> {
        vec![
            FlightRecord {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                airport: Airport::X,
                airline: Airline::B,
                movement: Movement::Arrival,
                status: FlightStatus::OnTime,
                passengers: 201,
            },
            FlightRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                airport: Airport::Z,
                airline: Airline::C,
                movement: Movement::Departure,
                status: FlightStatus::Cancelled,
                passengers: 187,
            },
        ]
    }

    #[test]
    fn csv_golden() {
        let bytes = export_csv(&sample_rows()).unwrap();
        let expected = concat!(
            "Data,Aeroporto,Companhia,Tipo,Status,Passageiros\n",
            "2024-03-01,Aeroporto X,Companhia B,Chegada,No Horário,201\n",
            "2024-01-15,Aeroporto Z,Companhia C,Partida,Cancelado,187\n",
        );
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn empty_export_still_has_header() {
        let bytes = export_csv(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Data,Aeroporto,Companhia,Tipo,Status,Passageiros\n"
        );
    }

    #[test]
    fn export_is_deterministic() {
        let rows = crate::data::generate(42, 300).unwrap();
        assert_eq!(export_csv(&rows).unwrap(), export_csv(&rows).unwrap());
    }

    #[test]
    fn csv_reads_back_into_records() {
        let rows = crate::data::generate(5, 50).unwrap();
        let bytes = export_csv(&rows).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let back: Vec<FlightRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn write_csv_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        write_csv_export(&path, &sample_rows()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Data,Aeroporto"));
    }

    #[test]
    fn write_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(EXPORT_FILE_NAME);
        let err = write_csv_export(&path, &sample_rows()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Io);
    }
}
