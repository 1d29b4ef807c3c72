//! Output rendering for scan reports
//!
//! Two formats: human-readable terminal text and machine-readable JSON.
//! Both are pure renderings of a [`ScanReport`]; the verdict-to-message
//! mapping is fixed and 1:1 with the classification label.

pub mod json;
pub mod text;

use crate::models::{Label, ScanReport};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Fixed message rendered for a phishing verdict.
pub const PHISHING_MESSAGE: &str = "Phishing Email Detected!";
/// Fixed message rendered for a legitimate verdict.
pub const LEGITIMATE_MESSAGE: &str = "Legitimate Email";

/// Message for a label; there is no third outcome.
pub fn verdict_message(label: Label) -> &'static str {
    match label {
        Label::Phishing => PHISHING_MESSAGE,
        Label::Legitimate => LEGITIMATE_MESSAGE,
    }
}

/// Render a report in the requested format.
pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::render(report),
        OutputFormat::Text => text::render(report),
    }
}
