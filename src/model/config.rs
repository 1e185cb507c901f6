use serde_json::Value;

/// How absent collaborator lists (`changelog`, `coverages`,
/// `probability_density_functions`) are represented in a mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentCollections {
    /// `None` encodes as `null`, and an absent or null key decodes to `None`
    Preserve,
    /// `None` encodes as `[]`, and an absent or null key decodes to an empty list
    Empty,
}

impl Default for AbsentCollections {
    fn default() -> Self {
        Self::Preserve
    }
}

/// Configuration for mapping conversion
///
/// The same convention is applied when encoding and decoding, so a record
/// converted with one configuration round-trips under that configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingConfig {
    /// Representation of absent collaborator lists
    pub absent_collections: AbsentCollections,
}

impl MappingConfig {
    /// Keep `null` and empty lists distinct (the default)
    pub fn preserve_null() -> Self {
        Self {
            absent_collections: AbsentCollections::Preserve,
        }
    }

    /// Normalize absent collaborator lists to empty lists in both directions
    pub fn normalize_empty() -> Self {
        Self {
            absent_collections: AbsentCollections::Empty,
        }
    }

    pub(crate) fn absent_list<T>(&self) -> Option<Vec<T>> {
        match self.absent_collections {
            AbsentCollections::Preserve => None,
            AbsentCollections::Empty => Some(Vec::new()),
        }
    }

    pub(crate) fn absent_value(&self) -> Value {
        match self.absent_collections {
            AbsentCollections::Preserve => Value::Null,
            AbsentCollections::Empty => Value::Array(Vec::new()),
        }
    }
}
