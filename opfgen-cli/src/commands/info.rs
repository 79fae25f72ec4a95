//! Info command implementation

use anyhow::{Context, Result};
use opfgen_core::{assemble, GenerateOptions, ManifestEntry, SpineEntry};
use serde::Serialize;

/// Package info output
#[derive(Serialize)]
struct PackageInfo<'a> {
    title: &'a str,
    creators: &'a [String],
    date: &'a str,
    publisher: &'a str,
    manifest: &'a [ManifestEntry],
    spine: &'a [SpineEntry],
}

/// Display what would be generated without writing anything
pub fn info(options: &GenerateOptions, json: bool) -> Result<()> {
    let document = assemble(options).context("Failed to read package sources")?;
    let metadata = &document.metadata;

    let info = PackageInfo {
        title: &metadata.title,
        creators: &metadata.creators,
        date: &metadata.date,
        publisher: &metadata.publisher,
        manifest: &document.manifest,
        spine: &document.spine,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Title:       {}", info.title);
    if !info.creators.is_empty() {
        println!("Creators:    {}", info.creators.join(", "));
    }
    println!("Date:        {}", info.date);
    println!("Publisher:   {}", info.publisher);

    println!("Manifest:    {} item(s)", info.manifest.len());
    for item in info.manifest {
        println!("  {:<20} {:<28} {}", item.id, item.media_type, item.href);
    }

    println!("Spine:       {} itemref(s)", info.spine.len());
    for entry in info.spine {
        let flow = if entry.linear { "" } else { " (non-linear)" };
        println!("  {}{}", entry.idref, flow);
    }

    Ok(())
}
