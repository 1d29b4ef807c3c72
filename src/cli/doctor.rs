//! Doctor command - check environment

use anyhow::Result;
use std::path::Path;

use crate::classifier::ModelArtifact;
use crate::nlp::Normalizer;

pub fn run(model_path: &Path) -> Result<()> {
    println!("Phishguard Doctor\n");

    // Check the model artifact (the fatal startup dependency)
    match ModelArtifact::load(model_path) {
        Ok(artifact) => {
            println!(
                "✓ Model artifact: OK ({}, language {}, {} features)",
                model_path.display(),
                artifact.language,
                artifact.vectorizer.num_features()
            );

            // Check the matching linguistic resources
            match Normalizer::new(&artifact.language) {
                Ok(_) => println!("✓ Linguistic resources: OK (bundled, no download needed)"),
                Err(e) => {
                    println!("✗ Linguistic resources: {e}");
                    anyhow::bail!("doctor found problems");
                }
            }
        }
        Err(e) => {
            println!("✗ Model artifact: {e}");
            println!("  Set --model, PHISHGUARD_MODEL, or [model].path in phishguard.toml");
            anyhow::bail!("doctor found problems");
        }
    }

    println!("\n✅ All checks passed!");
    Ok(())
}
