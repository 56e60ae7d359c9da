use serde::{Deserialize, Serialize};

/// Number of measurements in a feature vector.
pub const FEATURE_COUNT: usize = 7;

/// Semantic order of the measurements. Field extraction and the scaling
/// stages must agree on this order; a permutation produces a wrong
/// prediction, not an error.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "nitrogen",
    "phosphorus",
    "potassium",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// The seven soil/climate measurements for a single prediction.
///
/// Values are taken as-is: no range checks on pH, rainfall, or anything
/// else. Out-of-distribution inputs flow through to the model unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}
