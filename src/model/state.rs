use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::MappingConfig;
use super::id::{IdGenerator, UuidV4Generator};
use super::mapping::{encode, optional, Mapping, MappingRecord};
use super::quantity_values::QuantityValues;
use super::ModelError;

/// A named system condition with an optional quantity snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct State {
    /// State name
    pub name: Option<String>,

    /// Free-text description
    pub description: Option<String>,

    /// Quantity values observed in this state
    pub quantity_value: Option<QuantityValues>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given name
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Attach a quantity snapshot
    pub fn with_quantity_value(mut self, quantity_value: QuantityValues) -> Self {
        self.quantity_value = Some(quantity_value);
        self
    }

    /// Render as a mapping using an explicit configuration
    pub fn to_mapping_with(&self, config: &MappingConfig) -> Result<Mapping, ModelError> {
        let mut map = encode(self)?;
        if let Some(qv) = &self.quantity_value {
            map.insert(
                "quantity_value".into(),
                Value::Object(qv.to_mapping_with(config)?),
            );
        }
        Ok(map)
    }

    /// Reconstruct from a mapping using an explicit configuration and id source
    ///
    /// An absent, null or empty `quantity_value` yields `None`.
    pub fn from_mapping_with(
        map: &Mapping,
        config: &MappingConfig,
        ids: &dyn IdGenerator,
    ) -> Result<Self, ModelError> {
        let quantity_value = optional::<Mapping>(map, "quantity_value")?
            .filter(|inner| !inner.is_empty())
            .map(|inner| {
                QuantityValues::from_mapping_with(&inner, config, ids)
                    .map_err(|e| ModelError::nested("quantity_value", e))
            })
            .transpose()?;

        Ok(Self {
            name: optional(map, "name")?,
            description: optional(map, "description")?,
            quantity_value,
        })
    }
}

impl MappingRecord for State {
    fn to_mapping(&self) -> Result<Mapping, ModelError> {
        self.to_mapping_with(&MappingConfig::default())
    }

    fn from_mapping(map: &Mapping) -> Result<Self, ModelError> {
        Self::from_mapping_with(map, &MappingConfig::default(), &UuidV4Generator)
    }
}

impl TryFrom<Mapping> for State {
    type Error = ModelError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}
