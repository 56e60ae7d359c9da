use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A node in a fitted CART-style decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Terminal node carrying a class label.
    Leaf { label: u32 },
    /// Binary split: `feature <= threshold` descends left, otherwise right.
    Split {
        feature: usize,
        threshold: f32,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// A fitted decision-tree ensemble mapping a scaled feature vector to a crop
/// class label by majority vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropClassifier {
    trees: Vec<TreeNode>,
    /// Number of features the ensemble was fitted on.
    n_features: usize,
}

impl CropClassifier {
    /// Builds a classifier from fitted trees.
    ///
    /// # Errors
    ///
    /// Returns an error if the ensemble is empty or a split references a
    /// feature outside the fitted feature count.
    pub fn new(trees: Vec<TreeNode>, n_features: usize) -> Result<Self> {
        let classifier = Self { trees, n_features };
        classifier.validate()?;
        Ok(classifier)
    }

    /// Number of features the ensemble was fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of trees in the ensemble.
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Checks internal consistency: at least one tree, and every split
    /// references a feature the ensemble was fitted on.
    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(Error::Artifact("classifier has no trees".to_string()));
        }
        for tree in &self.trees {
            Self::validate_node(tree, self.n_features)?;
        }
        Ok(())
    }

    fn validate_node(node: &TreeNode, n_features: usize) -> Result<()> {
        match node {
            TreeNode::Leaf { .. } => Ok(()),
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => {
                if *feature >= n_features {
                    return Err(Error::Artifact(format!(
                        "split references feature {feature} but the model was fitted on {n_features} features"
                    )));
                }
                Self::validate_node(left, n_features)?;
                Self::validate_node(right, n_features)
            }
        }
    }

    /// Predicts the class label for one sample.
    ///
    /// Each tree votes; the label with the most votes wins, ties broken
    /// toward the smallest label. The returned label is the raw ensemble
    /// output, with no constraint on its range.
    pub fn predict(&self, x: &[f32]) -> Result<u32> {
        if x.len() != self.n_features {
            return Err(Error::InvalidDimension {
                expected: self.n_features,
                actual: x.len(),
            });
        }

        let mut votes: BTreeMap<u32, usize> = BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(Self::predict_one(tree, x)).or_insert(0) += 1;
        }

        // Ascending label order plus a strict comparison keeps ties on the
        // smallest label.
        let mut best = (0u32, 0usize);
        for (label, count) in votes {
            if count > best.1 {
                best = (label, count);
            }
        }
        Ok(best.0)
    }

    fn predict_one(tree: &TreeNode, x: &[f32]) -> u32 {
        let mut node = tree;
        loop {
            match node {
                TreeNode::Leaf { label } => return *label,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }
}
