//! Validate command implementation

use anyhow::{bail, Context, Result};
use opfgen_core::{assemble, validate as check, GenerateOptions};

/// Report consistency issues in the package that would be generated
pub fn validate(options: &GenerateOptions) -> Result<()> {
    let document = assemble(options).context("Failed to read package sources")?;
    let issues = check(&document);

    if issues.is_empty() {
        println!("Package is consistent");
        println!("  Manifest items: {}", document.manifest.len());
        println!("  Spine itemrefs: {}", document.spine.len());
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {}", issue);
    }
    bail!("Found {} consistency issue(s)", issues.len());
}
