use crate::classifier::CropClassifier;
use crate::error::Result;
use crate::features::FeatureVector;
use crate::scaler::{MinMaxScaler, StandardScaler};

/// The label type produced by the classifier.
pub type ClassLabel = u32;

/// Borrowed view over the three fitted artifacts, applied in fixed order.
///
/// The standard scaler was fitted on min-max-scaled data, so min-max scaling
/// always runs first. Swapping the stages produces a wrong prediction, not
/// an error.
#[derive(Debug, Clone, Copy)]
pub struct InferencePipeline<'a> {
    minmax: &'a MinMaxScaler,
    standard: &'a StandardScaler,
    classifier: &'a CropClassifier,
}

impl<'a> InferencePipeline<'a> {
    #[must_use]
    pub fn new(
        minmax: &'a MinMaxScaler,
        standard: &'a StandardScaler,
        classifier: &'a CropClassifier,
    ) -> Self {
        Self {
            minmax,
            standard,
            classifier,
        }
    }

    /// Runs both scaling stages and the classifier on one sample.
    ///
    /// # Errors
    ///
    /// Returns an error when any stage's fitted feature count does not match
    /// its input length. Values themselves are passed through unchecked.
    pub fn predict(&self, features: &FeatureVector) -> Result<ClassLabel> {
        let scaled = self.minmax.transform(features.as_slice())?;
        let standardized = self.standard.transform(&scaled)?;
        self.classifier.predict(&standardized)
    }
}
