use serde::{Deserialize, Serialize};

use super::changelog::ChangelogEntry;
use super::config::MappingConfig;
use super::coverage::Coverage;
use super::float;
use super::id::{resolve_id, IdGenerator, UuidV4Generator};
use super::mapping::{
    encode, fill_absent, optional, records, required, required_with, Mapping, MappingRecord,
};
use super::pdf::ProbabilityDensityFunction;
use super::ModelError;

const COLLABORATOR_LISTS: [&str; 3] = ["changelog", "coverages", "probability_density_functions"];

/// Values, uncertainties and associated metadata for one physical quantity
///
/// `quantities`, `symbols` and `units` are parallel lists. `values` and
/// `standard_uncertainties` are 2-D tables of the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct QuantityValues {
    /// Unique identifier, never empty
    pub id: String,

    /// Human-readable label
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Provenance entries in chronological order
    pub changelog: Option<Vec<ChangelogEntry>>,

    /// Names of the represented quantities (e.g., "voltage")
    pub quantities: Vec<String>,

    /// Mathematical symbols for the quantities (e.g., "U")
    pub symbols: Option<Vec<String>>,

    /// Unit of each quantity (e.g., "V")
    pub units: Vec<String>,

    /// Numeric values
    #[serde(serialize_with = "float::table::serialize")]
    pub values: Vec<Vec<f64>>,

    /// Standard uncertainty of each value
    #[serde(serialize_with = "float::table::serialize")]
    pub standard_uncertainties: Vec<Vec<f64>>,

    /// Coverage intervals
    pub coverages: Option<Vec<Coverage>>,

    /// Assumed distributions
    pub probability_density_functions: Option<Vec<ProbabilityDensityFunction>>,

    /// Correlation group tag per quantity
    pub correlation_indices: Option<Vec<i64>>,
}

impl QuantityValues {
    /// Build a well-formed record with a generated id
    pub fn new(
        name: &str,
        quantities: Vec<String>,
        units: Vec<String>,
        values: Vec<Vec<f64>>,
        standard_uncertainties: Vec<Vec<f64>>,
    ) -> Self {
        Self::builder(name)
            .quantities(quantities)
            .units(units)
            .values(values)
            .standard_uncertainties(standard_uncertainties)
            .build()
    }

    /// Start building a record with the given name
    pub fn builder(name: &str) -> QuantityValuesBuilder {
        QuantityValuesBuilder::new(name)
    }

    /// Render as a mapping using an explicit configuration
    pub fn to_mapping_with(&self, config: &MappingConfig) -> Result<Mapping, ModelError> {
        let mut map = encode(self)?;
        fill_absent(&mut map, &COLLABORATOR_LISTS, config);
        Ok(map)
    }

    /// Reconstruct from a mapping using an explicit configuration and id source
    pub fn from_mapping_with(
        map: &Mapping,
        config: &MappingConfig,
        ids: &dyn IdGenerator,
    ) -> Result<Self, ModelError> {
        let id: Option<String> = optional(map, "id")?;
        let record = Self {
            name: required(map, "name")?,
            description: optional(map, "description")?,
            changelog: records(map, "changelog", config)?,
            quantities: required(map, "quantities")?,
            symbols: optional(map, "symbols")?,
            units: required(map, "units")?,
            values: required_with(map, "values", |v| float::table::deserialize(v))?,
            standard_uncertainties: required_with(map, "standard_uncertainties", |v| {
                float::table::deserialize(v)
            })?,
            coverages: records(map, "coverages", config)?,
            probability_density_functions: records(map, "probability_density_functions", config)?,
            correlation_indices: optional(map, "correlation_indices")?,
            id: resolve_id(id, ids),
        };

        log::debug!(
            "Decoded quantity values '{}' ({} quantities)",
            record.id,
            record.quantities.len()
        );
        Ok(record)
    }
}

impl MappingRecord for QuantityValues {
    fn to_mapping(&self) -> Result<Mapping, ModelError> {
        self.to_mapping_with(&MappingConfig::default())
    }

    fn from_mapping(map: &Mapping) -> Result<Self, ModelError> {
        Self::from_mapping_with(map, &MappingConfig::default(), &UuidV4Generator)
    }
}

impl TryFrom<Mapping> for QuantityValues {
    type Error = ModelError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}

/// Builder for [`QuantityValues`]
///
/// Does not check that the required lists were supplied; only decoding from a
/// mapping enforces required fields.
#[derive(Debug, Clone, Default)]
pub struct QuantityValuesBuilder {
    id: Option<String>,
    name: String,
    description: Option<String>,
    changelog: Option<Vec<ChangelogEntry>>,
    quantities: Vec<String>,
    symbols: Option<Vec<String>>,
    units: Vec<String>,
    values: Vec<Vec<f64>>,
    standard_uncertainties: Vec<Vec<f64>>,
    coverages: Option<Vec<Coverage>>,
    probability_density_functions: Option<Vec<ProbabilityDensityFunction>>,
    correlation_indices: Option<Vec<i64>>,
}

impl QuantityValuesBuilder {
    /// Create a builder with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Use an explicit id; an empty id is replaced by a generated one
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set the description
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the changelog
    pub fn changelog(mut self, changelog: Vec<ChangelogEntry>) -> Self {
        self.changelog = Some(changelog);
        self
    }

    /// Append one changelog entry
    pub fn add_changelog_entry(mut self, entry: ChangelogEntry) -> Self {
        self.changelog.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Set the quantity names
    pub fn quantities(mut self, quantities: Vec<String>) -> Self {
        self.quantities = quantities;
        self
    }

    /// Set the quantity symbols
    pub fn symbols(mut self, symbols: Vec<String>) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Set the units
    pub fn units(mut self, units: Vec<String>) -> Self {
        self.units = units;
        self
    }

    /// Set the value table
    pub fn values(mut self, values: Vec<Vec<f64>>) -> Self {
        self.values = values;
        self
    }

    /// Set the standard uncertainty table
    pub fn standard_uncertainties(mut self, standard_uncertainties: Vec<Vec<f64>>) -> Self {
        self.standard_uncertainties = standard_uncertainties;
        self
    }

    /// Set the coverage intervals
    pub fn coverages(mut self, coverages: Vec<Coverage>) -> Self {
        self.coverages = Some(coverages);
        self
    }

    /// Set the probability density function descriptors
    pub fn probability_density_functions(mut self, pdfs: Vec<ProbabilityDensityFunction>) -> Self {
        self.probability_density_functions = Some(pdfs);
        self
    }

    /// Set the correlation indices
    pub fn correlation_indices(mut self, indices: Vec<i64>) -> Self {
        self.correlation_indices = Some(indices);
        self
    }

    /// Build the record, generating a UUID-v4 id if none was given
    pub fn build(self) -> QuantityValues {
        self.build_with(&UuidV4Generator)
    }

    /// Build the record, drawing a missing id from `ids`
    pub fn build_with(self, ids: &dyn IdGenerator) -> QuantityValues {
        QuantityValues {
            id: resolve_id(self.id, ids),
            name: self.name,
            description: self.description,
            changelog: self.changelog,
            quantities: self.quantities,
            symbols: self.symbols,
            units: self.units,
            values: self.values,
            standard_uncertainties: self.standard_uncertainties,
            coverages: self.coverages,
            probability_density_functions: self.probability_density_functions,
            correlation_indices: self.correlation_indices,
        }
    }
}
