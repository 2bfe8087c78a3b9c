/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places, ties to even on the scaled value
/// (same results as numpy's `round(x, 2)`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Occupied share of capacity as a percentage. Not clamped, so an
/// overfull lot reports more than 100.
///
/// Callers must have checked `total > 0`.
pub fn occupancy_rate(occupied: i64, total: i64) -> f64 {
    (occupied as f64 / total as f64) * 100.0
}
