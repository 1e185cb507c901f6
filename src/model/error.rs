/// Errors that can occur while converting records to and from mappings
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A required key is absent (or null) in the input mapping
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A key is present but holds a value of the wrong shape
    #[error("Invalid value for field '{field}': {source}")]
    InvalidField {
        /// Mapping key that failed to decode
        field: &'static str,
        /// Underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// A nested collaborator record failed to decode
    #[error("Malformed nested record at '{location}': {source}")]
    MalformedNestedRecord {
        /// Path of the nested record, e.g. `changelog[2]` or `quantity_value`
        location: String,
        /// Error raised by the nested record's own decoder
        #[source]
        source: Box<ModelError>,
    },

    /// A document or nested value was expected to be a JSON object
    #[error("Expected a JSON object for {0}")]
    NotAnObject(&'static str),

    /// JSON text parsing or encoding error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn nested(location: impl Into<String>, source: ModelError) -> Self {
        Self::MalformedNestedRecord {
            location: location.into(),
            source: Box::new(source),
        }
    }

    /// Name of the missing required field, looking through nested records
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) => Some(*field),
            Self::MalformedNestedRecord { source, .. } => source.missing_field(),
            _ => None,
        }
    }
}
