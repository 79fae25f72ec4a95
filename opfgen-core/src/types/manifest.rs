//! Manifest entries: one per packaged asset

use serde::{Deserialize, Serialize};

/// A single `<item>` of the package manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Identifier derived from the filename
    pub id: String,

    /// Registered content type (e.g., "application/xhtml+xml")
    pub media_type: String,

    /// Path of the asset relative to the package root, `/`-separated
    pub href: String,
}

impl ManifestEntry {
    pub fn new(
        id: impl Into<String>,
        media_type: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            media_type: media_type.into(),
            href: href.into(),
        }
    }
}
