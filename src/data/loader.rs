//! CSV loading for the sales and shipment tables.
//!
//! Expected sales columns:
//!   week_start, wholesaler, product, sales, forecast
//!
//! Expected shipment columns:
//!   year, month, week_start, wholesaler, product, volume
//!
//! Dates are ISO `YYYY-MM-DD`. Fields are trimmed.

use crate::core::{ShipmentRecord, WeeklyObservation};
use crate::error::{ForecastError, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load weekly sales observations from a CSV reader.
pub fn load_sales<R: Read>(reader: R) -> Result<Vec<WeeklyObservation>> {
    let records: Vec<WeeklyObservation> = read_records(reader)?;
    debug!(rows = records.len(), "loaded sales table");
    Ok(records)
}

/// Load weekly sales observations from a CSV file.
pub fn load_sales_file<P: AsRef<Path>>(path: P) -> Result<Vec<WeeklyObservation>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading sales table");
    load_sales(open(path)?)
}

/// Load shipment records from a CSV reader.
///
/// # Errors
/// Returns `Parse` for malformed rows, including a month outside `1..=12`.
pub fn load_shipments<R: Read>(reader: R) -> Result<Vec<ShipmentRecord>> {
    let records: Vec<ShipmentRecord> = read_records(reader)?;
    for (i, record) in records.iter().enumerate() {
        if !(1..=12).contains(&record.month) {
            return Err(ForecastError::Parse {
                line: i + 2,
                message: format!("month out of range: {}", record.month),
            });
        }
    }
    debug!(rows = records.len(), "loaded shipment table");
    Ok(records)
}

/// Load shipment records from a CSV file.
pub fn load_shipments_file<P: AsRef<Path>>(path: P) -> Result<Vec<ShipmentRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading shipment table");
    load_shipments(open(path)?)
}

fn open(path: &Path) -> Result<File> {
    File::open(path)
        .map_err(|e| ForecastError::Io(format!("failed to open '{}': {}", path.display(), e)))
}

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in csv_reader.deserialize::<T>().enumerate() {
        // Header is line 1
        let record: T = result.map_err(|e| ForecastError::Parse {
            line: row + 2,
            message: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}
