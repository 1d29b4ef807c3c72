//! Configuration for Phishguard
//!
//! Settings come from `phishguard.toml` in the working directory (or a
//! path given with `--config`), with CLI flags taking precedence. Every
//! section is optional; missing values fall back to defaults so a bare
//! `phishguard scan mail.txt` works without any config file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "phishguard.toml";

/// Default model artifact path relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/phishguard-v1.json";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized model artifact
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Extra stopwords removed on top of the bundled list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format (text, json)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl AppConfig {
    /// Load config from an explicit path, or from `phishguard.toml` in
    /// the working directory if present, or defaults otherwise.
    ///
    /// An explicit path that does not exist is an error; a missing
    /// implicit file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let implicit = PathBuf::from(CONFIG_FILE);
                if !implicit.exists() {
                    debug!("no {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Default config file contents written by `phishguard init`.
    pub fn default_file_contents() -> &'static str {
        r#"# Phishguard Configuration

[model]
# Path to the pre-trained model artifact (JSON)
path = "models/phishguard-v1.json"

[preprocess]
# Extra stopwords removed on top of the bundled list
extra_stopwords = []

[output]
# Default output format (text, json)
format = "text"
"#
    }
}
