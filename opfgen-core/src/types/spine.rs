//! Spine entries: the default reading order

use serde::{Deserialize, Serialize};

/// A single `<itemref>` of the package spine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpineEntry {
    /// Id of the manifest item this entry points at
    pub idref: String,

    /// Whether the item is part of the default linear reading order
    pub linear: bool,
}

impl SpineEntry {
    /// Create a linear spine entry
    pub fn new(idref: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
            linear: true,
        }
    }

    /// Create an entry rendered outside the linear flow (e.g., a cover page)
    pub fn non_linear(idref: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
            linear: false,
        }
    }
}
