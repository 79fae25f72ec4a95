//! Consistency checks run on an assembled package document
//!
//! The assembler itself never rejects input. These checks surface what a
//! reading system would trip over: spine references without a manifest item,
//! colliding ids or hrefs, and metadata left blank.

use crate::classify::UNCLASSIFIED_MEDIA_TYPE;
use crate::types::PackageDocument;
use std::collections::HashSet;
use std::fmt;

/// A single problem found in a package document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A spine itemref has no manifest item with that id
    DanglingIdref { idref: String },

    /// Two manifest items share an id
    DuplicateId { id: String, href: String },

    /// Two manifest items share an href
    DuplicateHref { href: String },

    /// A manifest item derived an empty id from its filename
    EmptyId { href: String },

    /// A manifest item's extension is not in the media type table
    UnclassifiedMediaType { href: String },

    /// A metadata field is blank
    EmptyMetadata { field: &'static str },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DanglingIdref { idref } => {
                write!(f, "spine itemref '{}' has no manifest item", idref)
            }
            Issue::DuplicateId { id, href } => {
                write!(f, "manifest id '{}' is reused by {}", id, href)
            }
            Issue::DuplicateHref { href } => write!(f, "manifest href '{}' is listed twice", href),
            Issue::EmptyId { href } => write!(f, "manifest item {} has an empty id", href),
            Issue::UnclassifiedMediaType { href } => {
                write!(f, "no media type known for {}", href)
            }
            Issue::EmptyMetadata { field } => write!(f, "metadata field '{}' is empty", field),
        }
    }
}

/// Check a package document, returning every issue found in document order
pub fn validate(doc: &PackageDocument) -> Vec<Issue> {
    let mut issues = Vec::new();

    let metadata = &doc.metadata;
    for (field, value) in [
        ("title", &metadata.title),
        ("date", &metadata.date),
        ("publisher", &metadata.publisher),
    ] {
        if value.trim().is_empty() {
            issues.push(Issue::EmptyMetadata { field });
        }
    }
    if metadata.creators.is_empty() {
        issues.push(Issue::EmptyMetadata { field: "creators" });
    }

    let mut ids = HashSet::new();
    let mut hrefs = HashSet::new();
    for item in &doc.manifest {
        if item.id.is_empty() {
            issues.push(Issue::EmptyId {
                href: item.href.clone(),
            });
        } else if !ids.insert(item.id.as_str()) {
            issues.push(Issue::DuplicateId {
                id: item.id.clone(),
                href: item.href.clone(),
            });
        }
        if !hrefs.insert(item.href.as_str()) {
            issues.push(Issue::DuplicateHref {
                href: item.href.clone(),
            });
        }
        if item.media_type == UNCLASSIFIED_MEDIA_TYPE {
            issues.push(Issue::UnclassifiedMediaType {
                href: item.href.clone(),
            });
        }
    }

    for entry in &doc.spine {
        if !ids.contains(entry.idref.as_str()) {
            issues.push(Issue::DanglingIdref {
                idref: entry.idref.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ManifestEntry, MetadataRecord, SpineEntry};

    fn metadata() -> MetadataRecord {
        MetadataRecord::new("T")
            .with_creator("A")
            .with_date("2024")
            .with_publisher("P")
    }

    #[test]
    fn test_consistent_document() {
        let doc = PackageDocument::new(
            metadata(),
            vec![
                ManifestEntry::new("cover", "application/xhtml+xml", "cover.xhtml"),
                ManifestEntry::new("style", "text/css", "style.css"),
            ],
            vec![SpineEntry::non_linear("cover")],
        );
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn test_dangling_and_duplicates() {
        let doc = PackageDocument::new(
            metadata(),
            vec![
                ManifestEntry::new("cover", "application/xhtml+xml", "cover.xhtml"),
                ManifestEntry::new("cover", "image/jpeg", "images/cover.jpg"),
                ManifestEntry::new("", "application/javascript", "a.js"),
                ManifestEntry::new("notes", UNCLASSIFIED_MEDIA_TYPE, "notes.bin"),
            ],
            vec![SpineEntry::new("cover"), SpineEntry::new("chapter9")],
        );

        assert_eq!(
            validate(&doc),
            vec![
                Issue::DuplicateId {
                    id: "cover".to_string(),
                    href: "images/cover.jpg".to_string(),
                },
                Issue::EmptyId {
                    href: "a.js".to_string(),
                },
                Issue::UnclassifiedMediaType {
                    href: "notes.bin".to_string(),
                },
                Issue::DanglingIdref {
                    idref: "chapter9".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_metadata() {
        let doc = PackageDocument::new(MetadataRecord::new("  "), Vec::new(), Vec::new());
        let fields: Vec<_> = validate(&doc)
            .into_iter()
            .map(|issue| issue.to_string())
            .collect();
        assert_eq!(
            fields,
            vec![
                "metadata field 'title' is empty",
                "metadata field 'date' is empty",
                "metadata field 'publisher' is empty",
                "metadata field 'creators' is empty",
            ]
        );
    }
}
