//! Data types used by the aggregation pipeline.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Number of hourly slots in a profile.
pub const HOURS_PER_DAY: usize = 24;

/// A single occupancy reading for a lot.
///
/// `time` is kept as the raw `HH:MM` literal; only its hour is used once the
/// lot has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub time: String,
    pub occupied: i64,
}

impl Sample {
    pub fn new(time: impl Into<String>, occupied: i64) -> Self {
        Self {
            time: time.into(),
            occupied,
        }
    }
}

/// A parking lot with a fixed capacity and its occupancy readings.
///
/// Field names follow the mock-data shape consumed by the app
/// (`name`, `total`, `dataPoints`). Unknown keys such as `id` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    pub name: String,
    pub total: i64,
    #[serde(rename = "dataPoints", default)]
    pub data_points: Vec<Sample>,
}

impl Lot {
    pub fn new(name: impl Into<String>, total: i64, data_points: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            total,
            data_points,
        }
    }
}

/// How the two-decimal rounding interacts with hourly averaging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Round every sample's rate, then average the rounded rates per hour.
    #[default]
    PerSample,
    /// Average the raw rates per hour, then round the hourly mean.
    AfterMean,
}

/// The 24-slot average occupancy curve for one lot, plus its peak.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyProfile {
    data: [f64; HOURS_PER_DAY],
    max_occupancy: f64,
}

impl HourlyProfile {
    /// Builds a profile from hourly slots; the peak is derived from them.
    pub fn from_hours(data: [f64; HOURS_PER_DAY]) -> Self {
        let max_occupancy = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            data,
            max_occupancy,
        }
    }

    pub fn data(&self) -> &[f64; HOURS_PER_DAY] {
        &self.data
    }

    pub fn max_occupancy(&self) -> f64 {
        self.max_occupancy
    }

    /// Average occupancy for `hour` (0–23), `None` when out of range.
    pub fn at(&self, hour: usize) -> Option<f64> {
        self.data.get(hour).copied()
    }
}

/// Hourly profiles for every lot, in input order.
///
/// Serializes as a JSON object keyed by lot name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopularTimes {
    lots: Vec<(String, HourlyProfile)>,
}

impl PopularTimes {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: String, profile: HourlyProfile) {
        self.lots.push((name, profile));
    }

    pub fn get(&self, name: &str) -> Option<&HourlyProfile> {
        self.lots
            .iter()
            .find(|(lot, _)| lot == name)
            .map(|(_, profile)| profile)
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HourlyProfile)> {
        self.lots.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for PopularTimes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lots.len()))?;
        for (name, profile) in &self.lots {
            map.serialize_entry(name, profile)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_peak_of_all_zero_is_zero() {
        let profile = HourlyProfile::from_hours([0.0; HOURS_PER_DAY]);
        assert_eq!(profile.max_occupancy(), 0.0);
    }

    #[test]
    fn test_profile_peak_can_exceed_hundred() {
        let mut hours = [0.0; HOURS_PER_DAY];
        hours[3] = 120.5;
        hours[4] = 99.0;
        let profile = HourlyProfile::from_hours(hours);
        assert_eq!(profile.max_occupancy(), 120.5);
        assert_eq!(profile.at(3), Some(120.5));
        assert_eq!(profile.at(24), None);
    }

    #[test]
    fn test_popular_times_serializes_in_insertion_order() {
        let mut times = PopularTimes::new();
        times.push("Zeta".into(), HourlyProfile::from_hours([0.0; HOURS_PER_DAY]));
        times.push("Alpha".into(), HourlyProfile::from_hours([0.0; HOURS_PER_DAY]));

        let json = serde_json::to_string(&times).unwrap();
        let zeta = json.find("Zeta").unwrap();
        let alpha = json.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_lot_deserializes_mock_data_shape() {
        let lot: Lot = serde_json::from_str(
            r#"{"id": 1, "name": "Lot 72", "total": 120,
                "dataPoints": [{"time": "07:00", "occupied": 10}]}"#,
        )
        .unwrap();

        assert_eq!(lot.name, "Lot 72");
        assert_eq!(lot.total, 120);
        assert_eq!(lot.data_points, vec![Sample::new("07:00", 10)]);
    }
}
