//! Error taxonomy for loading, validating and aggregating lot data.

use thiserror::Error;

/// Everything that can stop a popular-times run.
///
/// Validation variants carry the offending lot name so the message points at
/// the input record that needs fixing.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("lot {lot:?}: time {time:?} is not a 24-hour HH:MM value")]
    InvalidTime { lot: String, time: String },

    #[error("lot {lot:?}: total capacity must be positive, got {total}")]
    ZeroCapacity { lot: String, total: i64 },

    #[error("lot {lot:?}: occupied count at {time} is negative ({occupied})")]
    NegativeOccupancy {
        lot: String,
        time: String,
        occupied: i64,
    },

    #[error("lot {lot:?} appears more than once")]
    DuplicateLot { lot: String },

    #[error("lot {lot:?}: capacity changes between rows ({first} then {second})")]
    InconsistentCapacity { lot: String, first: i64, second: i64 },

    #[error("unsupported input file {path:?}, expected .json or .csv")]
    UnsupportedInput { path: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AggregateError>;
