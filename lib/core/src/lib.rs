//! # Cropwise Core
//!
//! Core library for the Cropwise recommendation service.
//!
//! This crate provides the fundamental types and algorithms:
//!
//! - [`FeatureVector`] - the seven ordered soil/climate measurements
//! - [`MinMaxScaler`] / [`StandardScaler`] - fitted feature transforms
//! - [`CropClassifier`] - fitted decision-tree ensemble with majority vote
//! - [`InferencePipeline`] - min-max scale, then standard scale, then classify
//! - [`crops::resolve`] - total class-label to crop-name lookup
//!
//! ## Example
//!
//! ```rust
//! use cropwise_core::{
//!     CropClassifier, FeatureVector, InferencePipeline, MinMaxScaler, StandardScaler, TreeNode,
//! };
//!
//! let minmax = MinMaxScaler::from_params(vec![0.0; 7], vec![100.0; 7]);
//! let standard = StandardScaler::from_params(vec![0.5; 7], vec![0.25; 7]);
//! let classifier = CropClassifier::new(vec![TreeNode::Leaf { label: 1 }], 7).unwrap();
//!
//! let pipeline = InferencePipeline::new(&minmax, &standard, &classifier);
//! let label = pipeline
//!     .predict(&FeatureVector::new([90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]))
//!     .unwrap();
//! assert_eq!(cropwise_core::crops::resolve(label), "Rice");
//! ```

pub mod classifier;
pub mod crops;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod scaler;

pub use classifier::{CropClassifier, TreeNode};
pub use error::{Error, Result};
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use pipeline::{ClassLabel, InferencePipeline};
pub use scaler::{MinMaxScaler, StandardScaler};
