use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::float;
use super::mapping::{optional, optional_with, required, Mapping, MappingRecord};
use super::ModelError;

/// Descriptor of the probability distribution assumed for a quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct ProbabilityDensityFunction {
    /// Distribution family (e.g., "normal", "uniform", "student-t")
    pub distribution: String,

    /// Distribution parameters keyed by name (e.g., "mean", "std")
    #[serde(serialize_with = "float::parameters::serialize")]
    pub parameters: Option<BTreeMap<String, f64>>,

    /// Free-text description
    pub description: Option<String>,
}

impl ProbabilityDensityFunction {
    /// Create a descriptor for the given distribution family
    pub fn new(distribution: &str) -> Self {
        Self {
            distribution: distribution.to_string(),
            parameters: None,
            description: None,
        }
    }

    /// Add a named distribution parameter
    pub fn with_parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value);
        self
    }
}

impl MappingRecord for ProbabilityDensityFunction {
    fn from_mapping(map: &Mapping) -> Result<Self, ModelError> {
        Ok(Self {
            distribution: required(map, "distribution")?,
            parameters: optional_with(map, "parameters", |v| float::parameters::deserialize(v))?
                .flatten(),
            description: optional(map, "description")?,
        })
    }
}

impl TryFrom<Mapping> for ProbabilityDensityFunction {
    type Error = ModelError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}
