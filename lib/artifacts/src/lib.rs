//! # Cropwise Artifacts
//!
//! Startup loading of the three fitted artifacts behind the inference
//! pipeline: the min-max scaler, the standard scaler, and the classifier.
//!
//! Artifacts are bincode-encoded files in a single directory. They are
//! deserialized once when the process starts and never mutated afterwards,
//! so an [`ArtifactStore`] behind an `Arc` is safe for any number of
//! concurrent requests without locking.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use cropwise_core::{
    CropClassifier, Error, InferencePipeline, MinMaxScaler, Result, StandardScaler,
};

/// File name of the serialized min-max scaler.
pub const MINMAX_SCALER_FILE: &str = "minmax_scaler.bin";
/// File name of the serialized standard scaler.
pub const STANDARD_SCALER_FILE: &str = "standard_scaler.bin";
/// File name of the serialized classifier.
pub const CLASSIFIER_FILE: &str = "classifier.bin";

/// The three fitted artifacts, loaded once and read-only thereafter.
#[derive(Debug)]
pub struct ArtifactStore {
    minmax: MinMaxScaler,
    standard: StandardScaler,
    classifier: CropClassifier,
}

impl ArtifactStore {
    /// Loads and validates the artifact set from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending file when any artifact is
    /// missing or undecodable, or when a decoded artifact is internally
    /// inconsistent. Callers treat this as fatal: the service cannot predict
    /// without a complete artifact set.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let minmax: MinMaxScaler = read_artifact(&dir.join(MINMAX_SCALER_FILE))?;
        let standard: StandardScaler = read_artifact(&dir.join(STANDARD_SCALER_FILE))?;
        let classifier: CropClassifier = read_artifact(&dir.join(CLASSIFIER_FILE))?;

        minmax.validate()?;
        standard.validate()?;
        classifier.validate()?;

        info!(
            "Loaded artifact set from {:?} ({} features, {} trees)",
            dir,
            classifier.n_features(),
            classifier.n_trees()
        );

        Ok(Self {
            minmax,
            standard,
            classifier,
        })
    }

    /// Writes a fitted artifact set to `dir`, creating the directory if
    /// needed.
    ///
    /// Each file is written to a temporary sibling and renamed into place so
    /// a concurrent reader never observes a partial artifact.
    pub fn save<P: AsRef<Path>>(
        dir: P,
        minmax: &MinMaxScaler,
        standard: &StandardScaler,
        classifier: &CropClassifier,
    ) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        write_artifact(&dir.join(MINMAX_SCALER_FILE), minmax)?;
        write_artifact(&dir.join(STANDARD_SCALER_FILE), standard)?;
        write_artifact(&dir.join(CLASSIFIER_FILE), classifier)?;
        Ok(())
    }

    /// Read-only handle to the min-max scaler.
    #[must_use]
    pub fn minmax(&self) -> &MinMaxScaler {
        &self.minmax
    }

    /// Read-only handle to the standard scaler.
    #[must_use]
    pub fn standard(&self) -> &StandardScaler {
        &self.standard
    }

    /// Read-only handle to the classifier.
    #[must_use]
    pub fn classifier(&self) -> &CropClassifier {
        &self.classifier
    }

    /// Inference pipeline borrowing the three artifacts.
    #[must_use]
    pub fn pipeline(&self) -> InferencePipeline<'_> {
        InferencePipeline::new(&self.minmax, &self.standard, &self.classifier)
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path)
        .map_err(|e| Error::Artifact(format!("cannot read {}: {e}", path.display())))?;
    bincode::deserialize(&data)
        .map_err(|e| Error::Artifact(format!("cannot decode {}: {e}", path.display())))
}

fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = bincode::serialize(value).map_err(|e| Error::Serialization(e.to_string()))?;
    let temp_file = path.with_extension("tmp");
    fs::write(&temp_file, &data)?;
    fs::rename(&temp_file, path)?;
    Ok(())
}
