//! Phishing detector service
//!
//! Explicitly constructed service object owning the normalizer and the
//! classifier. Built once at startup from a validated model artifact and
//! then shared read-only; there is no ambient/static model state. The
//! classifier sits behind the [`Classify`] trait so tests can swap in a
//! stub with a known decision boundary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::classifier::{Classify, ModelArtifact};
use crate::models::{deterministic_scan_id, Outcome, Verdict};
use crate::nlp::Normalizer;

/// Validation prompt shown instead of a verdict for empty input.
pub const EMPTY_INPUT_PROMPT: &str = "Please enter some email text.";

pub struct PhishingDetector {
    normalizer: Normalizer,
    classifier: Box<dyn Classify>,
}

impl PhishingDetector {
    /// Build a detector from an explicit normalizer and classifier.
    pub fn new(normalizer: Normalizer, classifier: Box<dyn Classify>) -> Self {
        Self {
            normalizer,
            classifier,
        }
    }

    /// Load the model artifact at `path` and build the matching
    /// preprocessing pipeline.
    ///
    /// Fails fast: a missing or invalid artifact, or an artifact trained
    /// for a language without bundled linguistic resources, is a startup
    /// error and no detector is constructed.
    pub fn from_artifact_path(path: &Path) -> Result<Self> {
        let artifact = ModelArtifact::load(path)
            .with_context(|| format!("failed to load model artifact {}", path.display()))?;
        Self::from_artifact(artifact)
    }

    /// Build a detector from an already-loaded artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let normalizer = Normalizer::new(&artifact.language).with_context(|| {
            format!(
                "no bundled linguistic resources for model language {:?}",
                artifact.language
            )
        })?;
        Ok(Self::new(normalizer, Box::new(artifact.into_pipeline())))
    }

    /// Add extra stopwords to the preprocessing pipeline.
    pub fn with_extra_stopwords(mut self, words: &[String]) -> Self {
        self.normalizer = self.normalizer.with_extra_stopwords(words);
        self
    }

    /// Handle one raw input: validate, normalize, classify.
    ///
    /// Empty or whitespace-only input is recovered locally as
    /// [`Outcome::EmptyInput`]; every other input classifies to exactly
    /// one label. Never fails.
    pub fn analyze(&self, raw: &str) -> Outcome {
        if raw.trim().is_empty() {
            return Outcome::EmptyInput;
        }
        let normalized = self.normalizer.normalize(raw);
        debug!(tokens = normalized.split_whitespace().count(), "normalized input");
        Outcome::Classified(self.classifier.classify(&normalized))
    }

    /// Analyze and wrap the result in a [`Verdict`] record for reports.
    ///
    /// Returns `None` for empty input (recorded as skipped by callers).
    pub fn scan(&self, source: &str, raw: &str) -> Option<Verdict> {
        match self.analyze(raw) {
            Outcome::EmptyInput => None,
            Outcome::Classified(label) => Some(Verdict {
                id: deterministic_scan_id(source, raw),
                source: source.to_string(),
                label,
                token_count: self.normalizer.token_count(raw),
            }),
        }
    }

    /// Normalized form of the input, exposed for the `normalize` command.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }
}
