//! The assembled package document

use super::{ManifestEntry, MetadataRecord, SpineEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything that ends up in `content.opf`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageDocument {
    /// Unique identifier, freshly generated for every run
    pub identifier: Uuid,

    /// Book metadata
    pub metadata: MetadataRecord,

    /// Manifest items in traversal order
    pub manifest: Vec<ManifestEntry>,

    /// Spine entries in reading order
    pub spine: Vec<SpineEntry>,
}

impl PackageDocument {
    /// Assemble a document with a fresh random identifier
    pub fn new(
        metadata: MetadataRecord,
        manifest: Vec<ManifestEntry>,
        spine: Vec<SpineEntry>,
    ) -> Self {
        Self::with_identifier(Uuid::new_v4(), metadata, manifest, spine)
    }

    /// Assemble a document with a caller-chosen identifier
    pub fn with_identifier(
        identifier: Uuid,
        metadata: MetadataRecord,
        manifest: Vec<ManifestEntry>,
        spine: Vec<SpineEntry>,
    ) -> Self {
        Self {
            identifier,
            metadata,
            manifest,
            spine,
        }
    }

    /// The identifier as written into `<dc:identifier>`
    pub fn identifier_urn(&self) -> String {
        format!("urn:uuid:{}", self.identifier)
    }

    /// Find a manifest item by id
    pub fn item(&self, id: &str) -> Option<&ManifestEntry> {
        self.manifest.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_identifier_per_document() {
        let a = PackageDocument::new(MetadataRecord::default(), Vec::new(), Vec::new());
        let b = PackageDocument::new(MetadataRecord::default(), Vec::new(), Vec::new());
        assert_ne!(a.identifier, b.identifier);
        assert!(a.identifier_urn().starts_with("urn:uuid:"));
    }

    #[test]
    fn test_item_lookup() {
        let doc = PackageDocument::new(
            MetadataRecord::new("T"),
            vec![ManifestEntry::new("cover", "application/xhtml+xml", "cover.xhtml")],
            vec![SpineEntry::non_linear("cover")],
        );
        assert_eq!(doc.item("cover").map(|i| i.href.as_str()), Some("cover.xhtml"));
        assert!(doc.item("missing").is_none());
    }
}
