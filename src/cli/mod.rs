//! CLI command definitions and handlers

mod doctor;
mod init;
mod normalize;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Phishguard - phishing email detection
///
/// 100% LOCAL - No account needed. No email text leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "phishguard")]
#[command(
    version,
    about = "Classify email text as phishing or legitimate with a pre-trained TF-IDF + linear model",
    long_about = "Phishguard runs a fixed NLP preprocessing pipeline (lowercase, tokenize, \
stopword removal, stemming) over email text and classifies the result with a \
pre-trained linear model loaded once at startup.\n\n\
100% LOCAL — No account needed. No email text leaves your machine.",
    after_help = "\
Examples:
  phishguard scan mail.txt             Classify one email file
  phishguard scan inbox/*.txt          Classify many files at once
  cat mail.txt | phishguard scan -     Classify stdin
  phishguard scan mail.txt --format json   JSON output for scripting
  phishguard normalize mail.txt        Show the preprocessed token string
  phishguard doctor                    Verify the model artifact loads

Documentation: https://github.com/phishguard/phishguard"
)]
pub struct Cli {
    /// Path to a config file (default: ./phishguard.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the model artifact (overrides config)
    #[arg(long, global = true, env = "PHISHGUARD_MODEL")]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify email text from files or stdin
    #[command(after_help = "\
Examples:
  phishguard scan mail.txt                       Classify one file
  phishguard scan a.txt b.txt c.txt              Classify several files
  cat mail.txt | phishguard scan -               Classify stdin
  phishguard scan mail.txt --format json         JSON output
  phishguard scan inbox/*.txt --fail-on-phishing Exit code 1 if any phishing (CI mode)")]
    Scan {
        /// Email files to classify; use '-' for stdin
        #[arg(value_name = "PATH", required = true)]
        inputs: Vec<PathBuf>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if any input classifies as phishing
        #[arg(long)]
        fail_on_phishing: bool,
    },

    /// Print the normalized token string for an input (no classification)
    Normalize {
        /// Email file to preprocess; use '-' for stdin
        #[arg(value_name = "PATH", default_value = "-")]
        input: PathBuf,
    },

    /// Check that the model artifact and linguistic resources load
    Doctor,

    /// Write a commented default phishguard.toml
    Init,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = crate::config::AppConfig::load(cli.config.as_deref())?;
    let model_path = cli.model.unwrap_or_else(|| config.model.path.clone());

    match cli.command {
        Commands::Scan {
            inputs,
            format,
            output,
            fail_on_phishing,
        } => {
            // Config values are not validated by clap; parse either way.
            let format: crate::reporters::OutputFormat = format
                .unwrap_or_else(|| config.output.format.clone())
                .parse()?;
            scan::run(
                &inputs,
                &model_path,
                &config,
                format,
                output.as_deref(),
                fail_on_phishing,
            )
        }
        Commands::Normalize { input } => normalize::run(&input, &model_path, &config),
        Commands::Doctor => doctor::run(&model_path),
        Commands::Init => init::run(),
    }
}

/// Read email text from a file, or from stdin when the path is '-'.
pub(crate) fn read_input(path: &std::path::Path) -> Result<(String, String)> {
    use anyhow::Context;
    use std::io::Read;

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(("stdin".to_string(), buf))
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok((path.display().to_string(), text))
    }
}
