//! TF-IDF feature extraction
//!
//! Inference-only counterpart of the vectorizer the model was trained
//! with: a fixed vocabulary mapping stems to column indices and a
//! per-column IDF table. Tokens outside the vocabulary contribute
//! nothing. Produces sparse feature vectors; with L2 normalization on
//! (the usual setting) the vector has unit norm unless it is empty.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ArtifactError;

/// A single non-zero feature: (column index, weight).
pub type SparseFeature = (usize, f32);

/// TF-IDF vectorizer with a frozen vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Stem → column index
    vocabulary: HashMap<String, usize>,
    /// Per-column inverse document frequency
    idf: Vec<f32>,
    /// Apply 1 + ln(tf) instead of raw counts
    #[serde(default)]
    sublinear_tf: bool,
    /// L2-normalize the output vector
    #[serde(default = "default_true")]
    l2_normalize: bool,
}

fn default_true() -> bool {
    true
}

impl TfidfVectorizer {
    /// Build a vectorizer, validating that every vocabulary index has an
    /// IDF entry and vice versa.
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f32>,
        sublinear_tf: bool,
        l2_normalize: bool,
    ) -> Result<Self, ArtifactError> {
        let v = Self {
            vocabulary,
            idf,
            sublinear_tf,
            l2_normalize,
        };
        v.validate()?;
        Ok(v)
    }

    /// Check internal dimension agreement. Called after deserialization.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(ArtifactError::DimensionMismatch {
                what: "vocabulary/idf",
                left: self.vocabulary.len(),
                right: self.idf.len(),
            });
        }
        for (stem, &idx) in &self.vocabulary {
            if idx >= self.idf.len() {
                return Err(ArtifactError::IndexOutOfRange {
                    stem: stem.clone(),
                    index: idx,
                    size: self.idf.len(),
                });
            }
        }
        Ok(())
    }

    /// Number of feature columns.
    pub fn num_features(&self) -> usize {
        self.idf.len()
    }

    /// Transform a normalized token string into a sparse feature vector.
    ///
    /// The empty string maps to the empty (all-zero) vector.
    pub fn transform(&self, normalized: &str) -> Vec<SparseFeature> {
        // Term frequencies over vocabulary columns
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in normalized.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        if counts.is_empty() {
            return Vec::new();
        }

        let mut features: Vec<SparseFeature> = counts
            .into_iter()
            .map(|(idx, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (idx, tf * self.idf[idx])
            })
            .collect();

        if self.l2_normalize {
            let norm = features
                .iter()
                .map(|(_, w)| (*w as f64) * (*w as f64))
                .sum::<f64>()
                .sqrt() as f32;
            if norm > 0.0 {
                for (_, w) in &mut features {
                    *w /= norm;
                }
            }
        }

        // Stable ordering for reproducible dot products
        features.sort_unstable_by_key(|(idx, _)| *idx);
        features
    }
}
