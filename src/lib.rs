//! # metrology - Metrology Data Records
//!
//! `metrology` models measurement data: physical quantities, their values and
//! standard uncertainties, correlation structure, probability density
//! functions, coverage intervals, and provenance history.
//!
//! Every record converts to and from a plain nested mapping
//! (`serde_json::Map`), which is what persistence, transport, and tooling
//! layers exchange. The library performs no numeric processing of the values.
//!
//! ## Quick Start
//!
//! ```rust
//! use metrology::model::{ChangelogEntry, MappingRecord, QuantityValues, State};
//!
//! let qv = QuantityValues::builder("Reference voltage")
//!     .quantities(vec!["voltage".to_string()])
//!     .symbols(vec!["U".to_string()])
//!     .units(vec!["V".to_string()])
//!     .values(vec![vec![10.000_012]])
//!     .standard_uncertainties(vec![vec![0.000_004]])
//!     .add_changelog_entry(ChangelogEntry::now("calibrated"))
//!     .build();
//!
//! let state = State::named("Laboratory at 23 degC").with_quantity_value(qv);
//!
//! let map = state.to_mapping()?;
//! let restored = State::from_mapping(&map)?;
//! assert_eq!(restored, state);
//!
//! let json = state.to_json()?;
//! assert_eq!(State::from_json(&json)?, state);
//! # Ok::<(), metrology::model::ModelError>(())
//! ```
//!
//! ## Mapping Layout
//!
//! | Key | Type | Required | Description |
//! |-----|------|----------|-------------|
//! | id | string | No | Generated UUID-v4 when absent |
//! | name | string | Yes | Label |
//! | description | string | No | Free text |
//! | changelog | array of objects | No | Provenance, chronological |
//! | quantities | array of strings | Yes | Quantity names |
//! | symbols | array of strings | No | Mathematical symbols |
//! | units | array of strings | Yes | Units, parallel to quantities |
//! | values | array of arrays of numbers | Yes | Value table |
//! | standard_uncertainties | array of arrays of numbers | Yes | Same shape as values |
//! | coverages | array of objects | No | Coverage intervals |
//! | probability_density_functions | array of objects | No | Distributions |
//! | correlation_indices | array of integers | No | Correlation groups |
//!
//! ## Architecture
//!
//! - [`model`]: records, the mapping contract, id generation, and configuration

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod model;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::model::{
        AbsentCollections, ChangelogEntry, Coverage, IdGenerator, Mapping, MappingConfig,
        MappingRecord, ModelError, ProbabilityDensityFunction, QuantityValues,
        QuantityValuesBuilder, SequentialIdGenerator, State, UuidV4Generator,
    };
}
