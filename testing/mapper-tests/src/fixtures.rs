use shapemap::{
    prelude::*,
    types::{Decimal, EntityRef},
};

// ---------------------------------------------------------------------------
// Car family
// Siblings that share `TopSpeed`, `Model` and `Year`.
// ---------------------------------------------------------------------------

///
/// Car
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct Car {
    pub top_speed: i32,
    pub model: Option<String>,
    pub year: i32,
}

///
/// Suv
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct Suv {
    pub top_speed: i32,
    pub model: Option<String>,
    pub year: i32,
    pub off_road_capability: i32,
}

///
/// Pickup
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct Pickup {
    pub top_speed: i32,
    pub model: Option<String>,
    pub year: i32,
    pub load_capacity: i32,
}

///
/// CarForm
/// Form-post shape: every property is text.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct CarForm {
    pub top_speed: String,
    pub model: String,
    pub year: String,
    pub trim: String,
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

///
/// Trim
///

#[derive(Clone, Copy, Debug, Default, Eq, MapEnum, PartialEq)]
pub enum Trim {
    #[default]
    Base,
    Sport = 10,
    Limited,
    #[map(name = "GT")]
    GrandTourer = -1,
}

///
/// Dealer
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct Dealer {
    pub id: i64,
    pub name: String,
}

///
/// CarEntity
/// Persisted car: identity columns, an enum and a navigation reference.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct CarEntity {
    pub id: i64,
    pub entity_key: Option<String>,
    pub top_speed: i32,
    pub model: Option<String>,
    pub year: i32,
    pub trim: Trim,
    pub price: Decimal,
    pub dealer: EntityRef<Dealer>,
}

///
/// CarDto
/// Wire shape for `CarEntity`.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct CarDto {
    pub id: i64,
    pub entity_key: Option<String>,
    pub top_speed: i32,
    pub model: Option<String>,
    pub year: i32,
    pub trim: String,
    pub price: Decimal,
    pub dealer: Option<i64>,
}

///
/// LegacyCar
/// Column names from an older schema, renamed onto current properties.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct LegacyCar {
    #[map(name = "TOP_SPEED")]
    pub speed: i32,
    #[map(name = "MODEL")]
    pub model_name: Option<String>,
    #[map(supertype = "RelatedEnd")]
    pub history: Vec<u8>,
}

///
/// InventoryRow
/// Target of tabular conversion.
///

#[derive(Clone, Debug, Default, Mappable, PartialEq)]
pub struct InventoryRow {
    pub model: String,
    pub year: i32,
    pub stock: i16,
    pub serial: i64,
    pub price: Decimal,
    pub certified: bool,
    pub trim: Trim,
    pub note: Option<String>,
}
