//! Init command - write a default config file

use anyhow::{Context, Result};
use console::style;

use crate::config::{AppConfig, CONFIG_FILE};

/// Run the init command
pub fn run() -> Result<()> {
    let config_path = std::path::Path::new(CONFIG_FILE);

    if config_path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            style(CONFIG_FILE).cyan()
        );
        return Ok(());
    }

    std::fs::write(config_path, AppConfig::default_file_contents())
        .with_context(|| format!("Failed to create {CONFIG_FILE}"))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(CONFIG_FILE).cyan()
    );

    println!("\nNext steps:");
    println!(
        "  {} Classify an email",
        style("phishguard scan mail.txt").cyan()
    );
    println!(
        "  {} Verify the model loads",
        style("phishguard doctor").cyan()
    );

    Ok(())
}
