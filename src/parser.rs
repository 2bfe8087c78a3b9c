//! Input parsing: `HH:MM` time literals and lot files (JSON or CSV).

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::{NaiveTime, Timelike};
use serde::Deserialize;
use tracing::{debug, info};

use crate::analyzers::types::{Lot, Sample};
use crate::error::{AggregateError, Result};

/// Extracts the hour of day from a 24-hour `HH:MM` literal.
///
/// Returns `None` for anything `chrono` will not parse with `%H:%M`
/// (out-of-range hours or minutes, seconds, free text) and for literals
/// containing whitespace, which chrono would otherwise skip before numbers.
pub fn parse_hour(time: &str) -> Option<usize> {
    if time.chars().any(char::is_whitespace) {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M")
        .ok()
        .map(|t| t.hour() as usize)
}

/// One row of the long-format CSV input.
#[derive(Debug, Deserialize)]
struct CsvRow {
    lot: String,
    total: i64,
    time: String,
    occupied: i64,
}

/// Loads lots from a `.json` or `.csv` file, chosen by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not decode, or has an
/// unsupported extension.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_lots(path: &Path) -> Result<Vec<Lot>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let lots = match ext.as_deref() {
        Some("json") => read_json_lots(File::open(path)?)?,
        Some("csv") => read_csv_lots(File::open(path)?)?,
        _ => {
            return Err(AggregateError::UnsupportedInput {
                path: path.display().to_string(),
            });
        }
    };

    info!(lots = lots.len(), "Lot input loaded");
    Ok(lots)
}

/// Decodes a JSON array of lots in the app's mock-data shape.
pub fn read_json_lots(reader: impl std::io::Read) -> Result<Vec<Lot>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decodes long-format CSV (`lot,total,time,occupied`), grouping rows into
/// lots in first-seen order.
///
/// # Errors
///
/// Fails on malformed rows, or when one lot reports two different capacities.
pub fn read_csv_lots(reader: impl std::io::Read) -> Result<Vec<Lot>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut lots: Vec<Lot> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for result in rdr.deserialize() {
        let row: CsvRow = result?;

        let slot = match index.get(&row.lot) {
            Some(&i) => {
                let lot = &lots[i];
                if lot.total != row.total {
                    return Err(AggregateError::InconsistentCapacity {
                        lot: row.lot,
                        first: lot.total,
                        second: row.total,
                    });
                }
                i
            }
            None => {
                debug!(lot = %row.lot, total = row.total, "New lot in CSV input");
                index.insert(row.lot.clone(), lots.len());
                lots.push(Lot::new(row.lot.clone(), row.total, Vec::new()));
                lots.len() - 1
            }
        };

        lots[slot]
            .data_points
            .push(Sample::new(row.time, row.occupied));
    }

    Ok(lots)
}
