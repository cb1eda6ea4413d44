use crate::{
    model::Supertype,
    traits::FieldValue,
    value::{TypeTag, Value},
};
use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign, Sum};
use rust_decimal::Decimal as WrappedDecimal;
use serde::Serialize;

///
/// Decimal
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Sub,
    SubAssign,
    Sum,
)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);

    /// Build from a mantissa and a base-10 scale (`value = num * 10^-scale`).
    #[must_use]
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    /// Permissive parse: surrounding whitespace is ignored, anything
    /// unparsable yields zero.
    #[must_use]
    pub fn parse_or_zero(text: &str) -> Self {
        text.trim().parse().unwrap_or(Self::ZERO)
    }
}

impl From<WrappedDecimal> for Decimal {
    fn from(d: WrappedDecimal) -> Self {
        Self(d)
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self(WrappedDecimal::from(n))
    }
}

impl FieldValue for Decimal {
    const TAG: TypeTag = TypeTag::Decimal;
    const SUPERTYPE: Supertype = Supertype::Value;

    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Decimal(v) => Some(*v),
            _ => None,
        }
    }
}

///
/// TESTS
///
