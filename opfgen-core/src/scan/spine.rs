//! Spine builder: top-level documents in reading order

use super::{is_hidden_marker, list_entries, ScanOptions};
use crate::classify::{derive_id, MediaType};
use crate::error::DirectoryError;
use crate::types::SpineEntry;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filename substrings that decide spine membership and linearity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpineRules {
    /// Files containing this are navigation documents and stay out of the spine
    pub toc_marker: String,

    /// Files containing this are stylesheets and stay out of the spine
    pub style_marker: String,

    /// Files containing this are cover pages, emitted with `linear="no"`
    pub cover_marker: String,
}

impl Default for SpineRules {
    fn default() -> Self {
        Self {
            toc_marker: "toc".to_string(),
            style_marker: "style".to_string(),
            cover_marker: "cover".to_string(),
        }
    }
}

impl SpineRules {
    fn excludes(&self, name: &str) -> bool {
        is_hidden_marker(name)
            || contains_marker(name, &self.toc_marker)
            || contains_marker(name, &self.style_marker)
    }

    fn is_cover(&self, name: &str) -> bool {
        contains_marker(name, &self.cover_marker)
    }
}

// An empty marker disables its rule instead of matching every name.
fn contains_marker(name: &str, marker: &str) -> bool {
    !marker.is_empty() && name.contains(marker)
}

/// Build the spine from the files directly inside `root`
///
/// Subdirectories are not descended into: only top-level documents take
/// part in the reading order.
pub fn build_spine(
    root: impl AsRef<Path>,
    options: &ScanOptions,
    rules: &SpineRules,
) -> Result<Vec<SpineEntry>, DirectoryError> {
    let root = root.as_ref();
    let mut spine = Vec::new();

    for entry in list_entries(root, options.sort_entries)? {
        if entry.is_dir || rules.excludes(&entry.name) {
            continue;
        }

        let idref = derive_id(&entry.name, MediaType::of(&entry.name), options.id_strategy);
        if rules.is_cover(&entry.name) {
            spine.push(SpineEntry::non_linear(idref));
        } else {
            spine.push(SpineEntry::new(idref));
        }
    }

    tracing::info!("Spine: {} itemref(s) from {}", spine.len(), root.display());
    Ok(spine)
}
