//! Error types for opfgen core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using OpfgenError
pub type Result<T> = std::result::Result<T, OpfgenError>;

/// Top-level error type for all pipeline stages
#[derive(Debug, Error)]
pub enum OpfgenError {
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Package error: {0}")]
    Package(#[from] PackageError),
}

/// Errors raised while loading the metadata file
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed metadata in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MetadataParseError,
    },
}

/// Reasons a metadata document cannot be mapped to a record
#[derive(Debug, Error)]
pub enum MetadataParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("document is empty")]
    Empty,

    #[error("expected a mapping at the top level, found {0}")]
    NotAMapping(&'static str),
}

/// Errors raised while walking the content directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file name is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },
}

/// Errors raised while assembling or writing the package document
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("serialized document is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("cannot write {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package document has {count} consistency issue(s), first: {first}")]
    Inconsistent { count: usize, first: String },
}

impl DirectoryError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirectoryError::Unreadable {
            path: path.into(),
            source,
        }
    }
}
