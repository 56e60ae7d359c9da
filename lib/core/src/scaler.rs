use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rescales each feature into a fixed target range using the per-feature
/// minima and maxima observed when the scaler was fitted.
///
/// The transformation is: x_scaled = (x - data_min) / (data_max - data_min),
/// mapped into [feature_min, feature_max].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Minimum of each feature at fit time.
    data_min: Vec<f32>,
    /// Maximum of each feature at fit time.
    data_max: Vec<f32>,
    /// Target minimum for scaling (default 0.0).
    feature_min: f32,
    /// Target maximum for scaling (default 1.0).
    feature_max: f32,
}

impl MinMaxScaler {
    /// Builds a scaler from fitted parameters, with the default [0, 1] range.
    #[must_use]
    pub fn from_params(data_min: Vec<f32>, data_max: Vec<f32>) -> Self {
        Self {
            data_min,
            data_max,
            feature_min: 0.0,
            feature_max: 1.0,
        }
    }

    /// Sets the target range for scaling.
    #[must_use]
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.feature_min = min;
        self.feature_max = max;
        self
    }

    /// Number of features the scaler was fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.data_min.len()
    }

    /// Returns the minimum value of each feature.
    #[must_use]
    pub fn data_min(&self) -> &[f32] {
        &self.data_min
    }

    /// Returns the maximum value of each feature.
    #[must_use]
    pub fn data_max(&self) -> &[f32] {
        &self.data_max
    }

    /// Checks that the fitted parameters are mutually consistent.
    pub fn validate(&self) -> Result<()> {
        if self.data_min.len() != self.data_max.len() {
            return Err(Error::Artifact(format!(
                "min-max scaler has {} minima but {} maxima",
                self.data_min.len(),
                self.data_max.len()
            )));
        }
        Ok(())
    }

    /// Scales one sample into the target range.
    ///
    /// Features whose fitted range collapses to a point map to the target
    /// minimum. Values outside the fitted range scale past the target range
    /// rather than clamping.
    pub fn transform(&self, x: &[f32]) -> Result<Vec<f32>> {
        if x.len() != self.data_min.len() {
            return Err(Error::InvalidDimension {
                expected: self.data_min.len(),
                actual: x.len(),
            });
        }

        let feature_range = self.feature_max - self.feature_min;
        Ok(x.iter()
            .enumerate()
            .map(|(j, &val)| {
                let data_range = self.data_max[j] - self.data_min[j];
                if data_range.abs() > 1e-10 {
                    (val - self.data_min[j]) / data_range * feature_range + self.feature_min
                } else {
                    self.feature_min
                }
            })
            .collect())
    }
}

/// Standardizes each feature to zero mean and unit variance relative to the
/// statistics observed when the scaler was fitted.
///
/// The standard score of a sample x is: z = (x - mean) / std
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature at fit time.
    mean: Vec<f32>,
    /// Standard deviation of each feature at fit time.
    std: Vec<f32>,
}

impl StandardScaler {
    /// Builds a scaler from fitted parameters.
    #[must_use]
    pub fn from_params(mean: Vec<f32>, std: Vec<f32>) -> Self {
        Self { mean, std }
    }

    /// Number of features the scaler was fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Returns the mean of each feature.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    /// Returns the standard deviation of each feature.
    #[must_use]
    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Checks that the fitted parameters are mutually consistent.
    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != self.std.len() {
            return Err(Error::Artifact(format!(
                "standard scaler has {} means but {} deviations",
                self.mean.len(),
                self.std.len()
            )));
        }
        Ok(())
    }

    /// Standardizes one sample.
    ///
    /// Features with a near-zero fitted deviation are centered but not
    /// scaled.
    pub fn transform(&self, x: &[f32]) -> Result<Vec<f32>> {
        if x.len() != self.mean.len() {
            return Err(Error::InvalidDimension {
                expected: self.mean.len(),
                actual: x.len(),
            });
        }

        Ok(x.iter()
            .enumerate()
            .map(|(j, &val)| {
                let centered = val - self.mean[j];
                if self.std[j] > 1e-10 {
                    centered / self.std[j]
                } else {
                    centered
                }
            })
            .collect())
    }
}
