//! Core data models for Phishguard
//!
//! These models are used throughout the codebase for representing
//! classification labels, per-email verdicts, and scan reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generate a deterministic scan ID based on content hash.
///
/// This ensures verdicts have stable IDs across runs, enabling:
/// - Deduplication of repeated scans of the same message
/// - Referencing a verdict from scripts or CI logs
///
/// The ID is a 16-character hex string derived from hashing:
/// - the input source (file path or "stdin")
/// - the raw email text
pub fn deterministic_scan_id(source: &str, raw_text: &str) -> String {
    // MD5 is stable across Rust/compiler versions, unlike DefaultHasher.
    let input = format!("{source}\n{raw_text}");
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)[..16].to_string()
}

/// Binary classification label
///
/// There is no third value and no confidence score; the decision
/// boundary of the loaded model assigns exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Phishing,
    Legitimate,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Phishing => write!(f, "phishing"),
            Label::Legitimate => write!(f, "legitimate"),
        }
    }
}

/// Result of handling one raw input
///
/// Empty or whitespace-only input is recovered locally with a prompt;
/// everything else classifies to exactly one [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was empty or whitespace-only; no classification attempted.
    EmptyInput,
    Classified(Label),
}

impl Outcome {
    pub fn label(&self) -> Option<Label> {
        match self {
            Outcome::EmptyInput => None,
            Outcome::Classified(label) => Some(*label),
        }
    }
}

/// Verdict for a single scanned email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(default)]
    pub id: String,
    /// Where the email text came from (file path or "stdin")
    #[serde(default)]
    pub source: String,
    pub label: Label,
    /// Number of tokens that survived normalization
    #[serde(default)]
    pub token_count: usize,
}

/// Summary of verdicts by label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    pub phishing: usize,
    pub legitimate: usize,
    /// Inputs skipped because they were empty or whitespace-only
    pub skipped: usize,
    pub total: usize,
}

impl ScanSummary {
    pub fn from_verdicts(verdicts: &[Verdict], skipped: usize) -> Self {
        let mut summary = Self {
            skipped,
            total: verdicts.len() + skipped,
            ..Self::default()
        };
        for v in verdicts {
            match v.label {
                Label::Phishing => summary.phishing += 1,
                Label::Legitimate => summary.legitimate += 1,
            }
        }
        summary
    }
}

/// Full report for a scan invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub verdicts: Vec<Verdict>,
    /// Sources skipped for empty input, with the validation prompt shown
    pub skipped: Vec<String>,
    pub summary: ScanSummary,
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn new(verdicts: Vec<Verdict>, skipped: Vec<String>) -> Self {
        let summary = ScanSummary::from_verdicts(&verdicts, skipped.len());
        Self {
            verdicts,
            skipped,
            summary,
            scanned_at: Utc::now(),
        }
    }

    pub fn has_phishing(&self) -> bool {
        self.summary.phishing > 0
    }
}
