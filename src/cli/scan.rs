//! Scan command - classify email text from files or stdin

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::AppConfig;
use crate::detector::PhishingDetector;
use crate::models::ScanReport;
use crate::reporters::{self, OutputFormat};

pub fn run(
    inputs: &[std::path::PathBuf],
    model_path: &Path,
    config: &AppConfig,
    format: OutputFormat,
    output: Option<&Path>,
    fail_on_phishing: bool,
) -> Result<()> {
    // Model load happens exactly once, before any input is touched.
    // A missing or corrupt artifact aborts here.
    let detector = PhishingDetector::from_artifact_path(model_path)?
        .with_extra_stopwords(&config.preprocess.extra_stopwords);

    let mut verdicts = Vec::new();
    let mut skipped = Vec::new();
    for input in inputs {
        let (source, raw) = super::read_input(input)?;
        match detector.scan(&source, &raw) {
            Some(verdict) => verdicts.push(verdict),
            None => skipped.push(source),
        }
    }

    let report = ScanReport::new(verdicts, skipped);
    info!(
        phishing = report.summary.phishing,
        legitimate = report.summary.legitimate,
        skipped = report.summary.skipped,
        "scan complete"
    );

    let rendered = reporters::render(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    if fail_on_phishing && report.has_phishing() {
        // CI mode: make phishing verdicts fail the invoking job.
        std::process::exit(1);
    }
    Ok(())
}
