//! End-to-end generation: metadata + content directory -> `content.opf`

use crate::error::{PackageError, Result};
use crate::scan::{build_manifest, build_spine, ScanOptions, SpineRules};
use crate::types::{MetadataRecord, PackageDocument};
use crate::validate::{validate, Issue};
use crate::xml::render_package;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the metadata file
pub const DEFAULT_METADATA_PATH: &str = "metadata.yaml";

/// Default content directory
pub const DEFAULT_CONTENT_DIR: &str = "OEBPS";

/// Default output file
pub const DEFAULT_OUTPUT_PATH: &str = "content.opf";

/// Everything a generation run needs to know
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub metadata_path: PathBuf,
    pub content_dir: PathBuf,
    pub output_path: PathBuf,
    pub scan: ScanOptions,
    pub spine_rules: SpineRules,

    /// Treat consistency issues as fatal
    pub strict: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            scan: ScanOptions::default(),
            spine_rules: SpineRules::default(),
            strict: false,
        }
    }
}

impl GenerateOptions {
    /// Options rooted at `dir`, using the default file layout inside it
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            metadata_path: dir.join(DEFAULT_METADATA_PATH),
            content_dir: dir.join(DEFAULT_CONTENT_DIR),
            output_path: dir.join(DEFAULT_OUTPUT_PATH),
            ..Self::default()
        }
    }
}

/// An assembled and serialized package document
#[derive(Debug, Clone)]
pub struct Generated {
    pub document: PackageDocument,
    pub xml: String,
    pub issues: Vec<Issue>,
}

/// Load metadata, walk the content directory and assemble the document
///
/// No file is written; stages fail in order and the first failure is returned.
pub fn assemble(options: &GenerateOptions) -> Result<PackageDocument> {
    let metadata = MetadataRecord::load(&options.metadata_path)?;
    let manifest = build_manifest(&options.content_dir, &options.scan)?;
    let spine = build_spine(&options.content_dir, &options.scan, &options.spine_rules)?;

    let document = PackageDocument::new(metadata, manifest, spine);
    tracing::debug!("Assembled package {}", document.identifier);
    Ok(document)
}

/// Assemble, check and serialize the package document
pub fn generate(options: &GenerateOptions) -> Result<Generated> {
    let document = assemble(options)?;

    let issues = validate(&document);
    for issue in &issues {
        tracing::warn!("{}", issue);
    }
    if options.strict {
        if let Some(first) = issues.first() {
            return Err(PackageError::Inconsistent {
                count: issues.len(),
                first: first.to_string(),
            }
            .into());
        }
    }

    let xml = render_package(&document)?;
    Ok(Generated {
        document,
        xml,
        issues,
    })
}

/// Write the serialized document to `path`
///
/// Writes to a temp file then renames, so a failed run never leaves a
/// truncated output behind.
pub fn write_output(path: impl AsRef<Path>, xml: &str) -> Result<()> {
    let path = path.as_ref();
    let unwritable = |source| PackageError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let temp_path = path.with_extension("opf.tmp");
    std::fs::write(&temp_path, xml).map_err(unwritable)?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(unwritable(e).into());
    }

    tracing::info!("Wrote {} ({} bytes)", path.display(), xml.len());
    Ok(())
}
