//! Static MET (Metabolic Equivalent of Task) table.
//!
//! Activity names are matched case-insensitively; anything not in the
//! table uses [`DEFAULT_MET`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// MET used for activities missing from the table
pub const DEFAULT_MET: f64 = 5.0;

const MET_VALUES: &[(&str, f64)] = &[
    ("walking", 3.5),
    ("jogging", 7.0),
    ("running", 9.8),
    ("cycling", 7.5),
    ("swimming", 8.0),
    ("weight_training", 6.0),
    ("yoga", 2.5),
    ("pilates", 3.0),
    ("hiit", 10.0),
    ("rowing", 8.5),
    ("elliptical", 5.5),
    ("stair_climbing", 9.0),
];

/// Cached lookup map - built once on first use
static MET_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| MET_VALUES.iter().copied().collect());

/// Look up the MET value for an activity, if the table knows it
pub fn lookup(activity_name: &str) -> Option<f64> {
    let key = activity_name.trim().to_lowercase();
    MET_TABLE.get(key.as_str()).copied()
}

/// MET value for an activity, falling back to [`DEFAULT_MET`]
pub fn met_for(activity_name: &str) -> f64 {
    lookup(activity_name).unwrap_or_else(|| {
        tracing::debug!(
            "No MET entry for {:?}, using default {}",
            activity_name,
            DEFAULT_MET
        );
        DEFAULT_MET
    })
}

/// All activity names in the table, sorted
pub fn known_activities() -> Vec<&'static str> {
    let mut names: Vec<_> = MET_TABLE.keys().copied().collect();
    names.sort_unstable();
    names
}
