//! Pre-trained classifier inference
//!
//! The model artifact composes a TF-IDF vectorizer with a linear
//! decision function, mirroring the pipeline it was trained as. This
//! module only does inference: the artifact is deserialized once at
//! startup, validated, and then shared read-only for the process
//! lifetime. There is no training, no reload, and no hot-swap.

mod artifact;
mod linear;
mod vectorizer;

pub use artifact::{ArtifactError, ModelArtifact, SCHEMA_VERSION};
pub use linear::LinearModel;
pub use vectorizer::TfidfVectorizer;

use crate::models::Label;

/// Classification over already-normalized text.
///
/// The detector depends on this trait rather than the concrete pipeline
/// so tests can substitute a stub with a fixed decision boundary.
pub trait Classify: Send + Sync {
    /// Classify a normalized token string. Empty input is valid and maps
    /// to whatever label the decision boundary assigns to the all-zero
    /// feature vector.
    fn classify(&self, normalized: &str) -> Label;
}

/// Vectorizer + linear classifier composed as one inference pipeline.
pub struct Pipeline {
    vectorizer: TfidfVectorizer,
    model: LinearModel,
}

impl Pipeline {
    pub fn new(vectorizer: TfidfVectorizer, model: LinearModel) -> Self {
        Self { vectorizer, model }
    }

    /// Raw decision value for a normalized token string.
    ///
    /// Positive values fall on the phishing side of the boundary. Only
    /// used internally and for debug logging; the public contract
    /// exposes the binary label alone.
    pub fn decision(&self, normalized: &str) -> f32 {
        let features = self.vectorizer.transform(normalized);
        self.model.decision(&features)
    }
}

impl Classify for Pipeline {
    fn classify(&self, normalized: &str) -> Label {
        let score = self.decision(normalized);
        let label = if score > self.model.threshold() {
            Label::Phishing
        } else {
            Label::Legitimate
        };
        tracing::debug!(score, %label, "classified normalized text");
        label
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// A small pipeline with hand-set weights: "verifi" and "urgent"
    /// push phishing, "report" and "meet" push legitimate.
    pub(crate) fn test_pipeline() -> Pipeline {
        let vocabulary: HashMap<String, usize> = [
            ("urgent".to_string(), 0),
            ("verifi".to_string(), 1),
            ("account".to_string(), 2),
            ("report".to_string(), 3),
            ("meet".to_string(), 4),
        ]
        .into_iter()
        .collect();
        let idf = vec![2.0, 2.5, 1.5, 1.8, 1.6];
        let vectorizer = TfidfVectorizer::new(vocabulary, idf, false, true).unwrap();
        let model = LinearModel::new(vec![1.5, 1.8, 0.7, -1.2, -1.0], -0.2, 0.0);
        Pipeline::new(vectorizer, model)
    }

    #[test]
    fn test_phishing_side() {
        let pipeline = test_pipeline();
        assert_eq!(pipeline.classify("urgent verifi account"), Label::Phishing);
    }

    #[test]
    fn test_legitimate_side() {
        let pipeline = test_pipeline();
        assert_eq!(pipeline.classify("meet report"), Label::Legitimate);
    }

    #[test]
    fn test_empty_input_is_deterministic() {
        let pipeline = test_pipeline();
        // All-zero feature vector: the bias decides, stably.
        let first = pipeline.classify("");
        for _ in 0..10 {
            assert_eq!(pipeline.classify(""), first);
        }
        assert_eq!(first, Label::Legitimate);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_bias() {
        let pipeline = test_pipeline();
        assert_eq!(
            pipeline.classify("zzz qqq unrelated"),
            Label::Legitimate
        );
    }
}
