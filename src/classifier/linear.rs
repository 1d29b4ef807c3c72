//! Linear decision function
//!
//! LinearSVC-style classifier: a weight per feature column plus a bias.
//! The decision value is the dot product of the sparse feature vector
//! with the weights; the sign relative to the threshold picks the label.

use serde::{Deserialize, Serialize};

use super::vectorizer::SparseFeature;
use super::ArtifactError;

/// Pre-trained linear classifier weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    weights: Vec<f32>,
    bias: f32,
    /// Decision threshold; scores above it classify as phishing.
    #[serde(default)]
    threshold: f32,
}

impl LinearModel {
    pub fn new(weights: Vec<f32>, bias: f32, threshold: f32) -> Self {
        Self {
            weights,
            bias,
            threshold,
        }
    }

    /// Number of feature columns this model expects.
    pub fn num_features(&self) -> usize {
        self.weights.len()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Check that every feature index the vectorizer can emit has a
    /// weight. Called once at artifact load.
    pub fn validate_against(&self, num_features: usize) -> Result<(), ArtifactError> {
        if self.weights.len() != num_features {
            return Err(ArtifactError::DimensionMismatch {
                what: "weights/vocabulary",
                left: self.weights.len(),
                right: num_features,
            });
        }
        Ok(())
    }

    /// Decision value for a sparse feature vector.
    ///
    /// The empty vector yields exactly the bias, which is what makes
    /// classification of empty input deterministic.
    pub fn decision(&self, features: &[SparseFeature]) -> f32 {
        let mut z = self.bias;
        for &(idx, weight) in features {
            z += self.weights[idx] * weight;
        }
        z
    }
}
