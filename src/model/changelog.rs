use serde::{Deserialize, Serialize};

use super::mapping::{optional, required, Mapping, MappingRecord};
use super::ModelError;

/// A provenance record describing one historical change to quantity data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct ChangelogEntry {
    /// When the change was made (RFC 3339)
    pub timestamp: String,

    /// What changed
    pub description: String,

    /// Who made the change
    pub author: Option<String>,

    /// Data version after the change
    pub version: Option<String>,
}

impl ChangelogEntry {
    /// Create a changelog entry with an explicit timestamp
    pub fn new(timestamp: &str, description: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            description: description.to_string(),
            author: None,
            version: None,
        }
    }

    /// Create a changelog entry stamped with the current UTC time
    pub fn now(description: &str) -> Self {
        Self::new(&chrono::Utc::now().to_rfc3339(), description)
    }

    /// Set the author of the change
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set the data version produced by the change
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }
}

impl MappingRecord for ChangelogEntry {
    fn from_mapping(map: &Mapping) -> Result<Self, ModelError> {
        Ok(Self {
            timestamp: required(map, "timestamp")?,
            description: required(map, "description")?,
            author: optional(map, "author")?,
            version: optional(map, "version")?,
        })
    }
}

impl TryFrom<Mapping> for ChangelogEntry {
    type Error = ModelError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}
