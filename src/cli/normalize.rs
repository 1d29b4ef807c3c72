//! Normalize command - show the preprocessed token string
//!
//! Runs only the text-normalization pipeline (lowercase, tokenize,
//! stopword removal, stemming) and prints the result. Useful for
//! inspecting exactly what the classifier will see.

use anyhow::Result;
use std::path::Path;

use crate::config::AppConfig;
use crate::detector::{PhishingDetector, EMPTY_INPUT_PROMPT};

pub fn run(input: &Path, model_path: &Path, config: &AppConfig) -> Result<()> {
    let detector = PhishingDetector::from_artifact_path(model_path)?
        .with_extra_stopwords(&config.preprocess.extra_stopwords);

    let (_, raw) = super::read_input(input)?;
    if raw.trim().is_empty() {
        eprintln!("{EMPTY_INPUT_PROMPT}");
        return Ok(());
    }
    println!("{}", detector.normalize(&raw));
    Ok(())
}
