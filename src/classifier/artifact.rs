//! Model artifact loading
//!
//! The artifact is a versioned JSON document holding the vectorizer
//! vocabulary, the IDF table, and the linear classifier weights. It is
//! loaded exactly once at startup; any problem (missing file, parse
//! failure, version or dimension mismatch) is fatal and nothing serves
//! classification requests. There is no reload path.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use super::{LinearModel, Pipeline, TfidfVectorizer};

/// Artifact schema version this build reads.
pub const SCHEMA_VERSION: u32 = 1;

/// Fatal artifact problems surfaced at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model artifact not found or unreadable at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact at {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported artifact schema version {found} (expected {SCHEMA_VERSION})")]
    SchemaVersion { found: u32 },
    #[error("artifact dimension mismatch ({what}): {left} vs {right}")]
    DimensionMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
    #[error("vocabulary stem {stem:?} maps to column {index} outside 0..{size}")]
    IndexOutOfRange {
        stem: String,
        index: usize,
        size: usize,
    },
}

/// On-disk representation of the trained pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    /// ISO 639-1 code of the language the model was trained on; the
    /// preprocessing pipeline must match it.
    pub language: String,
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearModel,
}

impl ModelArtifact {
    /// Load and validate an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        artifact.validate()?;
        info!(
            path = %path.display(),
            language = %artifact.language,
            features = artifact.vectorizer.num_features(),
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Validate schema version and dimension agreement.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ArtifactError::SchemaVersion {
                found: self.schema_version,
            });
        }
        self.vectorizer.validate()?;
        self.classifier
            .validate_against(self.vectorizer.num_features())?;
        Ok(())
    }

    /// Consume the artifact into an inference pipeline.
    pub fn into_pipeline(self) -> Pipeline {
        Pipeline::new(self.vectorizer, self.classifier)
    }
}
