//! opfgen Core Library
//!
//! Builds an OPF 2.0 package document (`content.opf`) from a YAML metadata
//! file and a directory of publication assets. The pipeline loads metadata,
//! walks the content tree into a manifest, derives the spine from the
//! top-level documents and serializes everything with quick-xml.

pub mod classify;
pub mod error;
pub mod pipeline;
pub mod scan;
pub mod types;
pub mod validate;
pub mod xml;

pub use classify::{classify, Classification, IdStrategy, MediaType};
pub use error::{
    DirectoryError, MetadataError, MetadataParseError, OpfgenError, PackageError, Result,
};
pub use pipeline::{assemble, generate, write_output, GenerateOptions, Generated};
pub use scan::{build_manifest, build_spine, ScanOptions, SpineRules};
pub use types::{ManifestEntry, MetadataRecord, PackageDocument, SpineEntry};
pub use validate::{validate, Issue};
pub use xml::render_package;
