//! Phishguard - phishing email detection CLI
//!
//! Classifies pasted or piped email text as phishing or legitimate
//! using a pre-trained linear model loaded once at startup.

use anyhow::Result;
use clap::Parser;
use phishguard::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
