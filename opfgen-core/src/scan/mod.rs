//! Content directory traversal shared by the manifest and spine builders

mod manifest;
mod spine;

pub use manifest::build_manifest;
pub use spine::{build_spine, SpineRules};

use crate::classify::IdStrategy;
use crate::error::DirectoryError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Operating-system marker files that never become part of a package
pub const HIDDEN_MARKERS: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Options controlling directory traversal and id derivation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Sort each directory listing by file name.
    /// Off by default: entries keep the order the filesystem returns.
    pub sort_entries: bool,

    /// How manifest ids and spine idrefs are derived
    pub id_strategy: IdStrategy,

    /// Path segment prepended to every manifest href
    pub href_prefix: Option<String>,
}

impl ScanOptions {
    pub fn sorted(mut self) -> Self {
        self.sort_entries = true;
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn with_href_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.href_prefix = Some(prefix.into());
        self
    }
}

/// One entry of a directory listing
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Whether a filename is an operating-system marker file
pub fn is_hidden_marker(name: &str) -> bool {
    HIDDEN_MARKERS.iter().any(|marker| name.contains(marker))
}

/// List the immediate entries of `dir`
///
/// Symlinks are followed when deciding whether an entry is a directory.
/// Names that are not valid UTF-8 are rejected rather than mangled.
pub(crate) fn list_entries(dir: &Path, sort: bool) -> Result<Vec<Entry>, DirectoryError> {
    let reader = fs::read_dir(dir).map_err(|e| DirectoryError::unreadable(dir, e))?;

    let mut entries = Vec::new();
    for dir_entry in reader {
        let dir_entry = dir_entry.map_err(|e| DirectoryError::unreadable(dir, e))?;
        let path = dir_entry.path();
        // hrefs and ids must be exact text
        let name = dir_entry
            .file_name()
            .into_string()
            .map_err(|_| DirectoryError::NonUtf8Name { path: path.clone() })?;
        let is_dir = fs::metadata(&path)
            .map_err(|e| DirectoryError::unreadable(&path, e))?
            .is_dir();

        entries.push(Entry {
            name,
            path,
            is_dir,
        });
    }

    if sort {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hidden_markers() {
        assert!(is_hidden_marker(".DS_Store"));
        assert!(is_hidden_marker("._.DS_Store"));
        assert!(is_hidden_marker("Thumbs.db"));
        assert!(!is_hidden_marker("chapter1.xhtml"));
    }

    #[test]
    fn test_list_entries_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.xhtml", "c.xhtml", "a.xhtml"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("images")).unwrap();

        let entries = list_entries(dir.path(), true).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.xhtml", "b.xhtml", "c.xhtml", "images"]);
        assert!(entries[3].is_dir);
        assert!(!entries[0].is_dir);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_rejects_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chapter1.xhtml"), "").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.xhtml")), "").unwrap();

        let err = list_entries(dir.path(), false).unwrap_err();
        assert!(matches!(err, DirectoryError::NonUtf8Name { .. }));
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_list_missing_directory() {
        let err = list_entries(Path::new("/nonexistent/OEBPS"), false).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/OEBPS"));
    }
}
