//! Text (terminal) reporter with colors and formatting

use crate::detector::EMPTY_INPUT_PROMPT;
use crate::models::{Label, ScanReport};
use crate::reporters::verdict_message;
use anyhow::Result;

/// Label colors (ANSI escape codes)
fn label_color(label: Label) -> &'static str {
    match label {
        Label::Phishing => "\x1b[31m",   // Red
        Label::Legitimate => "\x1b[32m", // Green
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn label_tag(label: Label) -> &'static str {
    match label {
        Label::Phishing => "[!]",
        Label::Legitimate => "[ok]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &ScanReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Phishguard Scan{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    for verdict in &report.verdicts {
        let color = label_color(verdict.label);
        out.push_str(&format!(
            "  {color}{}{RESET} {BOLD}{}{RESET}  {DIM}{} ({} tokens, id {}){RESET}\n",
            label_tag(verdict.label),
            verdict_message(verdict.label),
            verdict.source,
            verdict.token_count,
            verdict.id,
        ));
    }

    for source in &report.skipped {
        out.push_str(&format!(
            "  \x1b[33m[--]{RESET} {EMPTY_INPUT_PROMPT}  {DIM}{source}{RESET}\n"
        ));
    }

    let s = &report.summary;
    out.push('\n');
    let mut summary_parts = Vec::new();
    if s.phishing > 0 {
        summary_parts.push(format!("\x1b[31m{} phishing{RESET}", s.phishing));
    }
    if s.legitimate > 0 {
        summary_parts.push(format!("\x1b[32m{} legitimate{RESET}", s.legitimate));
    }
    if s.skipped > 0 {
        summary_parts.push(format!("\x1b[33m{} skipped{RESET}", s.skipped));
    }
    out.push_str(&format!(
        "{BOLD}SUMMARY{RESET} ({} scanned)  {}\n",
        s.total,
        summary_parts.join(" | ")
    ));

    if s.phishing > 0 {
        out.push_str(&format!(
            "{DIM}Always verify suspicious emails through official channels.{RESET}\n"
        ));
    }

    Ok(out)
}
