pub mod analyzers;
pub mod error;
pub mod output;
pub mod parser;
pub mod sample_data;

pub use analyzers::aggregate::{aggregate_lot, aggregate_lots};
pub use analyzers::types::{HourlyProfile, Lot, PopularTimes, RoundingPolicy, Sample};
pub use error::AggregateError;
