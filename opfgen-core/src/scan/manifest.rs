//! Manifest builder: recursive walk classifying every asset

use super::{is_hidden_marker, list_entries, ScanOptions};
use crate::classify::classify;
use crate::error::DirectoryError;
use crate::types::ManifestEntry;
use std::path::Path;

/// Build the manifest for every file under `root`
///
/// Traversal is depth-first and pre-order. Any unreadable directory aborts the
/// whole build: a manifest missing files would produce an invalid package.
pub fn build_manifest(
    root: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<Vec<ManifestEntry>, DirectoryError> {
    let root = root.as_ref();
    let prefix = options
        .href_prefix
        .as_deref()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty());

    let manifest = collect(root, prefix, options)?;
    tracing::info!(
        "Manifest: {} item(s) under {}",
        manifest.len(),
        root.display()
    );
    Ok(manifest)
}

fn collect(
    dir: &Path,
    rel: Option<&str>,
    options: &ScanOptions,
) -> Result<Vec<ManifestEntry>, DirectoryError> {
    let mut items = Vec::new();

    for entry in list_entries(dir, options.sort_entries)? {
        let href = match rel {
            Some(rel) => format!("{}/{}", rel, entry.name),
            None => entry.name.clone(),
        };

        if entry.is_dir {
            items.extend(collect(&entry.path, Some(href.as_str()), options)?);
            continue;
        }

        if is_hidden_marker(&entry.name) {
            tracing::debug!("Skipping marker file {}", entry.path.display());
            continue;
        }

        let classified = classify(&entry.name, options.id_strategy);
        if !classified.media_type.is_known() {
            tracing::debug!("No media type for {}, using {}", href, classified.media_type);
        }
        items.push(ManifestEntry::new(
            classified.id,
            classified.media_type.as_str(),
            href,
        ));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chapter1.xhtml"), "<html/>").unwrap();
        fs::write(dir.path().join("toc.ncx"), "<ncx/>").unwrap();
        fs::write(dir.path().join(".DS_Store"), "").unwrap();
        fs::create_dir_all(dir.path().join("images/inner")).unwrap();
        fs::write(dir.path().join("images/cover.jpg"), [0xFF, 0xD8]).unwrap();
        fs::write(dir.path().join("images/.DS_Store"), "").unwrap();
        fs::write(dir.path().join("images/inner/map.svg"), "<svg/>").unwrap();
        dir
    }

    #[test]
    fn test_manifest_relative_hrefs() {
        let dir = fixture();
        let manifest = build_manifest(dir.path(), &ScanOptions::default().sorted()).unwrap();

        assert_eq!(
            manifest,
            vec![
                ManifestEntry::new("chapter1", "application/xhtml+xml", "chapter1.xhtml"),
                ManifestEntry::new("cover", "image/jpeg", "images/cover.jpg"),
                ManifestEntry::new("map", "image/svg+xml", "images/inner/map.svg"),
                ManifestEntry::new("toc", "application/x-dtbncx+xml", "toc.ncx"),
            ]
        );
    }

    #[test]
    fn test_manifest_excludes_only_markers() {
        let dir = fixture();
        fs::write(dir.path().join("notes.bin"), "").unwrap();

        let manifest = build_manifest(dir.path(), &ScanOptions::default()).unwrap();
        assert_eq!(manifest.len(), 5);
        assert!(manifest.iter().all(|item| !item.href.contains(".DS_Store")));

        let unknown = manifest.iter().find(|item| item.href == "notes.bin").unwrap();
        assert_eq!(unknown.media_type, crate::classify::UNCLASSIFIED_MEDIA_TYPE);
    }

    #[test]
    fn test_manifest_href_prefix() {
        let dir = fixture();
        let options = ScanOptions::default().sorted().with_href_prefix("OEBPS/");
        let manifest = build_manifest(dir.path(), &options).unwrap();

        assert_eq!(manifest[0].href, "OEBPS/chapter1.xhtml");
        assert_eq!(manifest[2].href, "OEBPS/images/inner/map.svg");
    }

    #[cfg(unix)]
    #[test]
    fn test_manifest_nested_failure_aborts() {
        let dir = fixture();
        std::os::unix::fs::symlink(
            dir.path().join("images/gone.png"),
            dir.path().join("images/inner/broken.png"),
        )
        .unwrap();

        let result = build_manifest(dir.path(), &ScanOptions::default());
        match result {
            Err(DirectoryError::Unreadable { path, .. }) => {
                assert!(path.ends_with("images/inner/broken.png"));
            }
            other => panic!("expected an unreadable entry, got {:?}", other),
        }
    }

    #[test]
    fn test_manifest_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = build_manifest(dir.path().join("OEBPS"), &ScanOptions::default()).unwrap_err();
        assert!(err.to_string().contains("OEBPS"));
    }
}
