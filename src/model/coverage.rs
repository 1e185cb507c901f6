use serde::{Deserialize, Serialize};

use super::float;
use super::mapping::{optional, optional_with, required_with, Mapping, MappingRecord};
use super::ModelError;

/// Coverage interval for a set of quantity values
///
/// `lower_limits` and `upper_limits` follow the row/column layout of the
/// owning record's `values` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct Coverage {
    /// Coverage probability (e.g., 0.95)
    #[serde(serialize_with = "float::scalar::serialize")]
    pub coverage_probability: f64,

    /// Lower interval limits
    #[serde(serialize_with = "float::table::serialize")]
    pub lower_limits: Vec<Vec<f64>>,

    /// Upper interval limits
    #[serde(serialize_with = "float::table::serialize")]
    pub upper_limits: Vec<Vec<f64>>,

    /// Coverage factor k used to expand the standard uncertainty
    #[serde(serialize_with = "float::optional::serialize")]
    pub coverage_factor: Option<f64>,

    /// Free-text description (e.g., "shortest interval")
    pub description: Option<String>,
}

impl Coverage {
    /// Create a coverage interval from its limits
    pub fn new(
        coverage_probability: f64,
        lower_limits: Vec<Vec<f64>>,
        upper_limits: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            coverage_probability,
            lower_limits,
            upper_limits,
            coverage_factor: None,
            description: None,
        }
    }

    /// Set the coverage factor
    pub fn with_coverage_factor(mut self, k: f64) -> Self {
        self.coverage_factor = Some(k);
        self
    }
}

impl MappingRecord for Coverage {
    fn from_mapping(map: &Mapping) -> Result<Self, ModelError> {
        Ok(Self {
            coverage_probability: required_with(map, "coverage_probability", |v| {
                float::scalar::deserialize(v)
            })?,
            lower_limits: required_with(map, "lower_limits", |v| float::table::deserialize(v))?,
            upper_limits: required_with(map, "upper_limits", |v| float::table::deserialize(v))?,
            coverage_factor: optional_with(map, "coverage_factor", |v| {
                float::optional::deserialize(v)
            })?
            .flatten(),
            description: optional(map, "description")?,
        })
    }
}

impl TryFrom<Mapping> for Coverage {
    type Error = ModelError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}
