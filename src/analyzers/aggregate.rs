use crate::analyzers::types::{
    HOURS_PER_DAY, HourlyProfile, Lot, PopularTimes, RoundingPolicy,
};
use crate::analyzers::utility::{mean, occupancy_rate, round2};
use crate::analyzers::validate::{ValidLot, validate_lot, validate_lots};
use crate::error::Result;
use tracing::debug;

/// Aggregates one lot's samples into its [`HourlyProfile`].
///
/// Each sample becomes an occupancy rate, rates are bucketed by hour of day
/// and averaged, hours without samples stay at 0.0, and the peak is the
/// largest of the 24 slots. `policy` decides whether rounding to two
/// decimals happens per sample or on the hourly mean.
pub fn aggregate_lot(lot: &Lot, policy: RoundingPolicy) -> Result<HourlyProfile> {
    let valid = validate_lot(lot)?;
    Ok(hourly_profile(&valid, policy))
}

/// Aggregates every lot, keyed by name in input order.
///
/// All lots are validated before any is aggregated, so a bad record anywhere
/// fails the whole batch without partial results.
pub fn aggregate_lots(lots: &[Lot], policy: RoundingPolicy) -> Result<PopularTimes> {
    let valid = validate_lots(lots)?;

    let mut popular_times = PopularTimes::new();
    for lot in &valid {
        popular_times.push(lot.lot.name.clone(), hourly_profile(lot, policy));
    }

    Ok(popular_times)
}

#[tracing::instrument(
    skip(valid),
    fields(lot = %valid.lot.name, samples = valid.lot.data_points.len())
)]
fn hourly_profile(valid: &ValidLot<'_>, policy: RoundingPolicy) -> HourlyProfile {
    let lot = valid.lot;
    let mut buckets: [Vec<f64>; HOURS_PER_DAY] = std::array::from_fn(|_| Vec::new());

    for (sample, &hour) in lot.data_points.iter().zip(&valid.hours) {
        let rate = occupancy_rate(sample.occupied, lot.total);
        buckets[hour].push(match policy {
            RoundingPolicy::PerSample => round2(rate),
            RoundingPolicy::AfterMean => rate,
        });
    }

    let mut hours = [0.0; HOURS_PER_DAY];
    for (slot, rates) in hours.iter_mut().zip(&buckets) {
        if rates.is_empty() {
            continue;
        }
        *slot = match policy {
            RoundingPolicy::PerSample => mean(rates),
            RoundingPolicy::AfterMean => round2(mean(rates)),
        };
    }

    let profile = HourlyProfile::from_hours(hours);

    debug!(
        observed_hours = buckets.iter().filter(|b| !b.is_empty()).count(),
        max_occupancy = profile.max_occupancy(),
        "Lot aggregated"
    );

    profile
}
