//! Reference lot data, used when no input file is given.

use crate::analyzers::types::{Lot, Sample};

const ALLEN_FIELDHOUSE: &[(&str, i64)] = &[
    ("07:00", 10),
    ("08:00", 38),
    ("09:00", 48),
    ("10:00", 58),
    ("11:00", 57),
    ("12:00", 54),
    ("13:00", 50),
    ("14:00", 38),
    ("15:00", 32),
    ("16:00", 22),
    ("17:00", 12),
];

const MISSISSIPPI_STREET: &[(&str, i64)] = &[
    ("07:00", 25),
    ("08:00", 42),
    ("09:00", 65),
    ("10:00", 82),
    ("11:00", 94),
    ("12:00", 95),
    ("13:00", 88),
    ("14:00", 75),
    ("15:00", 60),
    ("16:00", 45),
    ("17:00", 30),
];

fn samples(points: &[(&str, i64)]) -> Vec<Sample> {
    points
        .iter()
        .map(|&(time, occupied)| Sample::new(time, occupied))
        .collect()
}

/// The two campus lots with one weekday of hourly readings each.
pub fn reference_lots() -> Vec<Lot> {
    vec![
        Lot::new("Allen Fieldhouse Lot", 60, samples(ALLEN_FIELDHOUSE)),
        Lot::new("Mississippi Street Garage", 100, samples(MISSISSIPPI_STREET)),
    ]
}
