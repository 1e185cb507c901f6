//! # Metrology Data Model
//!
//! Records describing measured physical quantities and the conditions they
//! were measured in, each with a round-trip to a plain mapping (a JSON
//! object) that downstream storage and transport layers consume.
//!
//! ## Records
//!
//! 1. **QuantityValues**: identity, labels, the value and standard uncertainty
//!    tables, correlation indices, and nested collaborator lists
//!
//! 2. **State**: a named condition owning an optional `QuantityValues`
//!
//! 3. **Collaborators**: `ChangelogEntry`, `Coverage` and
//!    `ProbabilityDensityFunction`, each with its own mapping contract
//!
//! ## Absent Lists
//!
//! Whether an absent collaborator list is written as `null` or `[]` is chosen
//! by [`MappingConfig`]; the default keeps `null` and `[]` distinct.

mod changelog;
mod config;
mod coverage;
mod error;
mod float;
mod id;
mod mapping;
mod pdf;
mod quantity_values;
mod state;

#[cfg(test)]
mod tests;

pub use changelog::ChangelogEntry;
pub use config::{AbsentCollections, MappingConfig};
pub use coverage::Coverage;
pub use error::ModelError;
pub use id::{IdGenerator, SequentialIdGenerator, UuidV4Generator};
pub use mapping::{Mapping, MappingRecord};
pub use pdf::ProbabilityDensityFunction;
pub use quantity_values::{QuantityValues, QuantityValuesBuilder};
pub use state::State;
