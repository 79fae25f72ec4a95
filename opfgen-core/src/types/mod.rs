//! Core types for the package document

mod manifest;
mod metadata;
mod package;
mod spine;

pub use manifest::ManifestEntry;
pub use metadata::MetadataRecord;
pub use package::PackageDocument;
pub use spine::SpineEntry;
