use std::collections::HashSet;

use tracing::debug;

use crate::analyzers::types::Lot;
use crate::error::{AggregateError, Result};
use crate::parser::parse_hour;

/// A lot that passed validation, with the hour of day of every sample
/// already parsed (same order as `lot.data_points`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLot<'a> {
    pub lot: &'a Lot,
    pub hours: Vec<usize>,
}

/// Checks a single lot: positive capacity, parseable times, non-negative counts.
pub fn validate_lot(lot: &Lot) -> Result<ValidLot<'_>> {
    if lot.total <= 0 {
        return Err(AggregateError::ZeroCapacity {
            lot: lot.name.clone(),
            total: lot.total,
        });
    }

    let mut hours = Vec::with_capacity(lot.data_points.len());
    for sample in &lot.data_points {
        let hour = parse_hour(&sample.time).ok_or_else(|| AggregateError::InvalidTime {
            lot: lot.name.clone(),
            time: sample.time.clone(),
        })?;
        if sample.occupied < 0 {
            return Err(AggregateError::NegativeOccupancy {
                lot: lot.name.clone(),
                time: sample.time.clone(),
                occupied: sample.occupied,
            });
        }
        hours.push(hour);
    }

    Ok(ValidLot { lot, hours })
}

/// Validates every lot before any aggregation runs, stopping at the first
/// problem. Lot names must be unique since they key the output object.
pub fn validate_lots(lots: &[Lot]) -> Result<Vec<ValidLot<'_>>> {
    let mut seen = HashSet::new();
    let mut valid = Vec::with_capacity(lots.len());

    for lot in lots {
        if !seen.insert(lot.name.as_str()) {
            return Err(AggregateError::DuplicateLot {
                lot: lot.name.clone(),
            });
        }
        valid.push(validate_lot(lot)?);
    }

    debug!(lots = lots.len(), "Lot input validated");
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Sample;

    fn lot(total: i64, samples: &[(&str, i64)]) -> Lot {
        Lot::new(
            "Test Lot",
            total,
            samples.iter().map(|(t, o)| Sample::new(*t, *o)).collect(),
        )
    }

    #[test]
    fn test_valid_lot() {
        assert!(validate_lot(&lot(60, &[("07:00", 10), ("23:59", 61)])).is_ok());
    }

    #[test]
    fn test_valid_lot_carries_parsed_hours() {
        let l = lot(60, &[("07:00", 10), ("07:45", 12), ("23:59", 61)]);
        let valid = validate_lot(&l).unwrap();
        assert_eq!(valid.hours, vec![7, 7, 23]);
    }

    #[test]
    fn test_empty_lot_is_valid() {
        assert!(validate_lot(&lot(60, &[])).is_ok());
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(
            validate_lot(&lot(0, &[("07:00", 1)])),
            Err(AggregateError::ZeroCapacity { total: 0, .. })
        ));
        assert!(matches!(
            validate_lot(&lot(-5, &[])),
            Err(AggregateError::ZeroCapacity { total: -5, .. })
        ));
    }

    #[test]
    fn test_invalid_time() {
        let err = validate_lot(&lot(60, &[("07:00", 1), ("7pm", 2)])).unwrap_err();
        match err {
            AggregateError::InvalidTime { lot, time } => {
                assert_eq!(lot, "Test Lot");
                assert_eq!(time, "7pm");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_occupancy() {
        assert!(matches!(
            validate_lot(&lot(60, &[("07:00", -1)])),
            Err(AggregateError::NegativeOccupancy { occupied: -1, .. })
        ));
    }

    #[test]
    fn test_duplicate_lot_names() {
        let lots = vec![lot(60, &[]), lot(100, &[])];
        assert!(matches!(
            validate_lots(&lots),
            Err(AggregateError::DuplicateLot { .. })
        ));
    }

    #[test]
    fn test_error_message_names_the_lot() {
        let err = validate_lot(&lot(0, &[])).unwrap_err();
        assert!(err.to_string().contains("Test Lot"));
    }
}
