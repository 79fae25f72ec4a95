//! Generate command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use opfgen_core::{generate as generate_package, write_output, GenerateOptions};
use std::time::Duration;

/// Build the package document and write it to the output path
pub fn generate(options: &GenerateOptions, echo: bool) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message(format!("Scanning {}...", options.content_dir.display()));
    let generated = match generate_package(options) {
        Ok(generated) => generated,
        Err(e) => {
            pb.abandon_with_message("Generation failed, no output written");
            return Err(e).context("Failed to generate package document");
        }
    };

    tracing::info!(
        "Assembled '{}' with {} manifest item(s) and {} spine itemref(s)",
        generated.document.metadata.title,
        generated.document.manifest.len(),
        generated.document.spine.len()
    );

    if echo {
        pb.suspend(|| println!("{}", generated.xml));
    }

    pb.set_message(format!("Writing {}...", options.output_path.display()));
    write_output(&options.output_path, &generated.xml)
        .with_context(|| format!("Failed to write {}", options.output_path.display()))?;

    pb.finish_with_message(format!(
        "Generated '{}' -> {}",
        generated.document.metadata.title,
        options.output_path.display()
    ));

    Ok(())
}
