//! Core runtime for Shapemap: values, static type models, the mapping
//! passes (exclusion, matching, coercion), single-property access, tabular
//! row conversion, and the observability sink.
#![warn(unreachable_pub)]

extern crate self as shapemap;

// public exports are one module level down
pub mod config;
pub mod error;
pub mod map;
pub mod model;
pub mod obs;
pub mod property;
pub mod rows;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::MapperConfig;
pub use error::{ConversionError, MapError};
pub use map::{
    ExclusionSet, MapMode, Mapper, bind, create_and_map, create_and_map_entity, map_into_entity,
};
pub use property::{get_property, set_property};
pub use rows::{Row, Table, rows_to_objects};

///
/// Prelude
///
/// Prelude contains only mapping vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        map::{ExclusionSet, Mapper},
        model::{PropertyModel, Supertype, TypeModel},
        traits::{FieldValue, MapEnum, Mappable},
        value::{TypeTag, Value},
    };
}
