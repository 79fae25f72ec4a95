//! Asset classification: media type lookup and id derivation
//!
//! Both the manifest and the spine builder derive ids through [`derive_id`],
//! so a spine `idref` always matches the manifest `id` of the same file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media type written for files whose extension is not in the table
pub const UNCLASSIFIED_MEDIA_TYPE: &str = "application/octet-stream";

/// Extension to content-type table (lowercase extensions)
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("xhtml", "application/xhtml+xml"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("xml", "application/xml"),
    ("ncx", "application/x-dtbncx+xml"),
    ("opf", "application/oebps-package+xml"),
    ("smil", "application/smil+xml"),
    ("pls", "application/pls+xml"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("mp3", "audio/mpeg"),
    ("m4a", "audio/mp4"),
    ("mp4", "video/mp4"),
];

/// Trailing characters dropped from a filename to form its id, per media type.
///
/// Each length is the dot plus the canonical extension of that type. Types
/// reached through a second, longer extension keep the canonical length, so
/// `photo.jpeg` yields `photo.` and `page.htm` yields `pag`.
const ID_SUFFIX_LENGTHS: &[(&str, usize)] = &[
    ("application/xhtml+xml", 6),
    ("text/html", 5),
    ("application/xml", 4),
    ("application/x-dtbncx+xml", 4),
    ("application/oebps-package+xml", 4),
    ("application/smil+xml", 5),
    ("application/pls+xml", 4),
    ("text/css", 4),
    ("application/javascript", 3),
    ("application/json", 5),
    ("text/plain", 4),
    ("image/jpeg", 4),
    ("image/jpg", 4),
    ("image/png", 4),
    ("image/gif", 4),
    ("image/svg+xml", 4),
    ("image/webp", 5),
    ("font/ttf", 4),
    ("font/otf", 4),
    ("font/woff", 5),
    ("font/woff2", 6),
    ("audio/mpeg", 4),
    ("audio/mp4", 4),
    ("video/mp4", 4),
];

/// Suffix length for unclassified files
const DEFAULT_SUFFIX_LEN: usize = 5;

/// Outcome of the media type lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Known(&'static str),
    Unclassified,
}

impl MediaType {
    /// Look up the media type of a filename by its final extension
    pub fn of(filename: &str) -> Self {
        let ext = match filename.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return MediaType::Unclassified,
        };

        MEDIA_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, media_type)| MediaType::Known(*media_type))
            .unwrap_or(MediaType::Unclassified)
    }

    /// Content type to write, falling back to a best-effort type
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Known(media_type) => *media_type,
            MediaType::Unclassified => UNCLASSIFIED_MEDIA_TYPE,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, MediaType::Known(_))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How ids are derived from filenames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Drop the trailing characters listed for the media type
    #[default]
    Legacy,

    /// Drop everything from the last `.`
    Stem,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(IdStrategy::Legacy),
            "stem" => Ok(IdStrategy::Stem),
            other => Err(format!("unknown id strategy '{}' (expected legacy or stem)", other)),
        }
    }
}

/// Result of classifying one filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub media_type: MediaType,
    pub id: String,
}

/// Classify a filename into its media type and manifest id
pub fn classify(filename: &str, strategy: IdStrategy) -> Classification {
    let media_type = MediaType::of(filename);
    Classification {
        id: derive_id(filename, media_type, strategy),
        media_type,
    }
}

/// Number of trailing characters the legacy strategy drops for a media type
pub fn suffix_len(media_type: MediaType) -> usize {
    match media_type {
        MediaType::Known(known) => ID_SUFFIX_LENGTHS
            .iter()
            .find(|(media_type, _)| *media_type == known)
            .map(|(_, len)| *len)
            .unwrap_or(DEFAULT_SUFFIX_LEN),
        MediaType::Unclassified => DEFAULT_SUFFIX_LEN,
    }
}

/// Derive an id from a filename
///
/// Under [`IdStrategy::Legacy`] a name shorter than the suffix yields an
/// empty id, which the consistency check reports.
pub fn derive_id(filename: &str, media_type: MediaType, strategy: IdStrategy) -> String {
    match strategy {
        IdStrategy::Legacy => {
            let keep = filename.chars().count().saturating_sub(suffix_len(media_type));
            filename.chars().take(keep).collect()
        }
        IdStrategy::Stem => match filename.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => filename.to_string(),
        },
    }
}
