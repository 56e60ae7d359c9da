//! # Cropwise
//!
//! A crop recommendation service: seven soil/climate measurements pass
//! through two fixed scaling stages and a decision-tree ensemble, and come
//! back as a crop name, over a form endpoint and a JSON endpoint.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cropwise --artifact-dir ./artifacts --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use cropwise::prelude::*;
//!
//! # fn run() -> cropwise::Result<()> {
//! let store = ArtifactStore::load("./artifacts")?;
//! let features = FeatureVector::new([90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]);
//! let label = store.pipeline().predict(&features)?;
//! println!("{}", crops::resolve(label));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! Cropwise is composed of several crates:
//!
//! - `cropwise-core` - feature vector, scalers, classifier, label resolver
//! - `cropwise-artifacts` - startup loading of the fitted artifact set
//! - `cropwise-api` - REST endpoints (form page, form predict, JSON predict)

// Re-export core types
pub use cropwise_core::{
    crops, ClassLabel, CropClassifier, Error, FeatureVector, InferencePipeline, MinMaxScaler,
    Result, StandardScaler, TreeNode, FEATURE_COUNT, FEATURE_NAMES,
};

// Re-export the artifact store
pub use cropwise_artifacts::{
    ArtifactStore, CLASSIFIER_FILE, MINMAX_SCALER_FILE, STANDARD_SCALER_FILE,
};

// Re-export the API
pub use cropwise_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        crops, ArtifactStore, ClassLabel, CropClassifier, Error, FeatureVector, InferencePipeline,
        MinMaxScaler, Result, RestApi, StandardScaler, TreeNode,
    };
}
