//! Shapemap: convention-based property mapping between shapes.
//!
//! This is the public meta-crate. Downstream users depend on **shapemap** only.
//!
//! It re-exports the stable public API from:
//!   - `shapemap-core`   (models, values, mapping passes, row conversion)
//!   - `shapemap-derive` (the `Mappable` and `MapEnum` derives)
//!
//! Generated code refers to `::shapemap::{traits, model, value, error}`,
//! so those paths are part of the contract.

pub use shapemap_core::{config, error, map, model, obs, property, rows, traits, types, value};

pub use shapemap_core::{
    ConversionError, ExclusionSet, MapError, MapMode, Mapper, MapperConfig, Row, Table, bind,
    create_and_map, create_and_map_entity, get_property, map_into_entity, rows_to_objects,
    set_property,
};

//
// Derives
//

pub use shapemap_derive::{MapEnum, Mappable};

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Prelude
//

pub mod prelude {
    pub use shapemap_core::prelude::*;
    pub use shapemap_derive::{MapEnum, Mappable};
}
