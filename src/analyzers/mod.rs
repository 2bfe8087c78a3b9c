//! Occupancy aggregation.
//!
//! This module turns per-lot occupancy samples into 24-slot hourly
//! profiles: rates are computed per sample, grouped by hour of day,
//! averaged, zero-filled and capped off with the daily peak.

pub mod aggregate;
pub mod types;
pub mod utility;
pub mod validate;
