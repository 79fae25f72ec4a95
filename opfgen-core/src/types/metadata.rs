//! Book metadata record read from the YAML metadata file

use crate::error::{MetadataError, MetadataParseError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::path::Path;

/// Dublin Core fields consumed by the package document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Book title
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,

    /// Publication date, kept verbatim
    #[serde(default, deserialize_with = "scalar_text")]
    pub date: String,

    /// Publisher name
    #[serde(default, deserialize_with = "scalar_text")]
    pub publisher: String,

    /// Authors and contributors, in document order
    #[serde(default, deserialize_with = "creator_list")]
    pub creators: Vec<String>,
}

impl MetadataRecord {
    /// Create a record with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Add an author/creator
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creators.push(creator.into());
        self
    }

    /// Set the publication date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Read and parse the metadata file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MetadataError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let record = Self::parse(&text).map_err(|source| MetadataError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "Loaded metadata '{}' with {} creator(s) from {}",
            record.title,
            record.creators.len(),
            path.display()
        );
        Ok(record)
    }

    /// Parse metadata from YAML text
    pub fn parse(text: &str) -> Result<Self, MetadataParseError> {
        let document: Value = serde_yaml::from_str(text)?;
        if document.is_mapping() {
            return Ok(serde_yaml::from_value(document)?);
        }

        match document {
            Value::Null => Err(MetadataParseError::Empty),
            other => Err(MetadataParseError::NotAMapping(value_kind(&other))),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Render any YAML scalar as text; `date: 2024` is read as "2024"
fn scalar_to_text(value: Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s),
        Value::Tagged(tagged) => scalar_to_text(tagged.value),
        other => Err(format!("expected a scalar, found {}", value_kind(&other))),
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_text(value).map_err(serde::de::Error::custom)
}

fn creator_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .into_iter()
            .map(scalar_to_text)
            .collect::<Result<Vec<_>, _>>()
            .map_err(serde::de::Error::custom),
        single => scalar_to_text(single)
            .map(|creator| vec![creator])
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_fields() {
        let record = MetadataRecord::parse(
            "title: T\ndate: \"2024\"\npublisher: P\ncreators:\n  - A\n  - B\n",
        )
        .unwrap();
        assert_eq!(record.title, "T");
        assert_eq!(record.date, "2024");
        assert_eq!(record.publisher, "P");
        assert_eq!(record.creators, vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record = MetadataRecord::parse("title: T\nlanguage: en\nrights: none\n").unwrap();
        assert_eq!(record, MetadataRecord::new("T"));
    }

    #[test]
    fn test_numeric_date_is_text() {
        let record = MetadataRecord::parse("title: T\ndate: 2024\n").unwrap();
        assert_eq!(record.date, "2024");
    }

    #[test]
    fn test_single_creator_scalar() {
        let record = MetadataRecord::parse("creators: Jane Doe\n").unwrap();
        assert_eq!(record.creators, vec!["Jane Doe"]);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let record = MetadataRecord::parse("publisher: P\n").unwrap();
        assert!(record.title.is_empty());
        assert!(record.date.is_empty());
        assert!(record.creators.is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        assert!(MetadataRecord::parse("").is_err());
        assert!(matches!(
            MetadataRecord::parse("- just\n- a list\n"),
            Err(MetadataParseError::NotAMapping("a sequence"))
        ));
        assert!(matches!(
            MetadataRecord::parse("title: [unclosed\n"),
            Err(MetadataParseError::Yaml(_))
        ));
        assert!(matches!(
            MetadataRecord::parse("title:\n  nested: map\n"),
            Err(MetadataParseError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_malformed_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("metadata.yaml");
        std::fs::write(&path, "42\n").unwrap();

        let err = MetadataRecord::load(&path).unwrap_err();
        assert!(matches!(
            err,
            MetadataError::Malformed {
                source: MetadataParseError::NotAMapping("a number"),
                ..
            }
        ));
        assert!(err.to_string().contains("metadata.yaml"));
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MetadataRecord::load("/nonexistent/metadata.yaml").unwrap_err();
        assert!(matches!(err, MetadataError::Unreadable { .. }));
        assert!(err.to_string().contains("/nonexistent/metadata.yaml"));
    }
}
