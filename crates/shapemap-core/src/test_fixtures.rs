//! Mappable shapes shared by the unit tests.

use crate::{
    error::ConversionError,
    model::{PropertyModel, Supertype, TypeModel},
    traits::Mappable,
    types::{Decimal, EntityRef},
    value::{TypeTag, Value},
};
use shapemap_derive::{MapEnum, Mappable};

///
/// Suv
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Suv {
    pub(crate) top_speed: i32,
    pub(crate) model: Option<String>,
    pub(crate) year: i32,
    pub(crate) off_road_capability: i32,
}

///
/// Pickup
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Pickup {
    pub(crate) top_speed: i32,
    pub(crate) model: Option<String>,
    pub(crate) year: i32,
    pub(crate) load_capacity: i32,
}

///
/// TextualSuv
/// Same names as `Suv`, every value carried as text.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct TextualSuv {
    pub(crate) top_speed: String,
    pub(crate) model: Option<String>,
    pub(crate) year: String,
    pub(crate) off_road_capability: String,
}

///
/// Color
///

#[derive(Clone, Copy, Debug, Default, Eq, MapEnum, PartialEq)]
pub(crate) enum Color {
    #[default]
    Red,
    Green,
    DeepBlue = 7,
}

///
/// Colored
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Colored {
    pub(crate) color: Color,
    pub(crate) name: String,
}

///
/// Garage
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Garage {
    pub(crate) capacity: i32,
    pub(crate) open: bool,
    pub(crate) color: String,
    pub(crate) rating: f64,
    pub(crate) photo: Vec<u8>,
    pub(crate) owner: Option<String>,
}

///
/// Tracked
/// Entity-shaped: identity columns plus a navigation reference.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Tracked {
    pub(crate) id: i64,
    pub(crate) entity_key: Option<String>,
    pub(crate) name: String,
    pub(crate) owner: EntityRef<Garage>,
}

///
/// Ledger
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Ledger {
    pub(crate) posted: bool,
    pub(crate) amount: Decimal,
    pub(crate) memo: String,
    pub(crate) reference: Option<i64>,
}

///
/// Twin
/// Two properties whose names differ only by case.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Twin {
    #[map(name = "Model")]
    pub(crate) first: Option<String>,
    #[map(name = "MODEL")]
    pub(crate) second: Option<String>,
}

///
/// Wide
/// Integer properties one size up from `Suv`.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub(crate) struct Wide {
    pub(crate) top_speed: Option<i64>,
    pub(crate) year: i64,
}

///
/// Unnamed
/// Hand-written model with an empty property name.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Unnamed {
    pub(crate) value: i32,
}

impl Mappable for Unnamed {
    const MODEL: &'static TypeModel = &TypeModel {
        path: "test_fixtures::Unnamed",
        properties: &[PropertyModel {
            name: "",
            type_name: "i32",
            tag: TypeTag::Int32,
            supertype: Supertype::Value,
            nullable: false,
            variants: &[],
        }],
    };

    fn get_value(&self, index: usize) -> Option<Value> {
        (index == 0).then_some(Value::Int32(self.value))
    }

    fn set_value(&mut self, index: usize, value: Value) -> Result<(), ConversionError> {
        match (index, value) {
            (0, Value::Int32(v)) => {
                self.value = v;
                Ok(())
            }
            (0, other) => Err(ConversionError::rejected(&Self::MODEL.properties[0], &other)),
            _ => Err(ConversionError::UnknownProperty { index }),
        }
    }
}
