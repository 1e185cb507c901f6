//! Mapping representation shared by every record.
//!
//! A mapping is a JSON object (`serde_json::Map`). Records encode through their
//! derived `Serialize` impls, which write every key and use `null` for absent
//! optional values. Decoding goes key by key through the helpers below so that
//! missing and malformed keys are reported with the field they belong to.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::config::MappingConfig;
use super::ModelError;

/// Plain nested mapping representation of a record
pub type Mapping = serde_json::Map<String, Value>;

/// Round-trip contract between a record and its [`Mapping`] representation
pub trait MappingRecord: Serialize + Sized {
    /// Render the record as a mapping
    fn to_mapping(&self) -> Result<Mapping, ModelError> {
        encode(self)
    }

    /// Reconstruct the record from a mapping
    fn from_mapping(map: &Mapping) -> Result<Self, ModelError>;

    /// Serialize to compact JSON text
    fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.to_mapping()?)?)
    }

    /// Serialize to indented JSON text
    fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(&self.to_mapping()?)?)
    }

    /// Deserialize from JSON text
    fn from_json(json: &str) -> Result<Self, ModelError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Self::from_mapping(&map),
            _ => Err(ModelError::NotAnObject("document root")),
        }
    }
}

/// Serialize a record into a mapping
pub(crate) fn encode<T: Serialize>(record: &T) -> Result<Mapping, ModelError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        _ => Err(ModelError::NotAnObject("encoded record")),
    }
}

/// Replace `null` collaborator lists with the configured absent value
pub(crate) fn fill_absent(map: &mut Mapping, fields: &[&str], config: &MappingConfig) {
    for field in fields {
        if let Some(value) = map.get_mut(*field) {
            if value.is_null() {
                *value = config.absent_value();
            }
        }
    }
}

/// Read a required key with a custom decoder; absent or `null` is a
/// [`ModelError::MissingField`]
pub(crate) fn required_with<T, F>(
    map: &Mapping,
    field: &'static str,
    decode: F,
) -> Result<T, ModelError>
where
    F: FnOnce(&Value) -> Result<T, serde_json::Error>,
{
    match map.get(field) {
        None | Some(Value::Null) => Err(ModelError::MissingField(field)),
        Some(value) => {
            log::trace!("Decoding required field {}", field);
            decode(value).map_err(|source| ModelError::InvalidField { field, source })
        }
    }
}

/// Read a required key
pub(crate) fn required<T: DeserializeOwned>(
    map: &Mapping,
    field: &'static str,
) -> Result<T, ModelError> {
    required_with(map, field, |value| T::deserialize(value))
}

/// Read an optional key with a custom decoder; absent or `null` yields `None`
pub(crate) fn optional_with<T, F>(
    map: &Mapping,
    field: &'static str,
    decode: F,
) -> Result<Option<T>, ModelError>
where
    F: FnOnce(&Value) -> Result<T, serde_json::Error>,
{
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode(value)
            .map(Some)
            .map_err(|source| ModelError::InvalidField { field, source }),
    }
}

/// Read an optional key
pub(crate) fn optional<T: DeserializeOwned>(
    map: &Mapping,
    field: &'static str,
) -> Result<Option<T>, ModelError> {
    optional_with(map, field, |value| T::deserialize(value))
}

/// Read a list of nested records, decoding each element with its own contract
pub(crate) fn records<T: MappingRecord>(
    map: &Mapping,
    field: &'static str,
    config: &MappingConfig,
) -> Result<Option<Vec<T>>, ModelError> {
    let Some(items) = optional::<Vec<Mapping>>(map, field)? else {
        return Ok(config.absent_list());
    };

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::from_mapping(item)
                .map_err(|e| ModelError::nested(format!("{}[{}]", field, index), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(records))
}
