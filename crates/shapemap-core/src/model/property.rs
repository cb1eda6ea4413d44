use crate::{model::names_eq, value::TypeTag};
use serde::Serialize;

///
/// Supertype
///
/// Immediate base of a property's declared type.
///
/// `Object` is the unconstrained base (plain reference shapes); `Value`
/// marks primitive value types; `Named` carries a framework base such as
/// an ORM navigation type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Supertype {
    Enum,
    Value,
    Object,
    Named(&'static str),
}

impl Supertype {
    #[must_use]
    pub const fn is_unconstrained(self) -> bool {
        matches!(self, Self::Object)
    }
}

///
/// EnumVariantModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct EnumVariantModel {
    pub name: &'static str,
    pub discriminant: i64,
}

///
/// PropertyModel
///
/// Runtime descriptor for one mappable property.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyModel {
    /// Property name as matched against other shapes (case-insensitive).
    pub name: &'static str,
    /// Declared Rust type as written, whitespace removed.
    pub type_name: &'static str,
    /// Semantic tag used for coercion dispatch.
    pub tag: TypeTag,
    pub supertype: Supertype,
    /// Whether the declared type admits `Value::Null` (`Option<T>`).
    pub nullable: bool,
    /// Members of the declared enum type; empty for non-enum properties.
    pub variants: &'static [EnumVariantModel],
}

impl PropertyModel {
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.tag, TypeTag::Enum)
    }

    /// Declared types agree: same tag and same type name, ignoring case.
    #[must_use]
    pub fn same_declared_type(&self, other: &Self) -> bool {
        self.tag == other.tag && names_eq(self.type_name, other.type_name)
    }

    /// Find an enum member by name, ignoring case.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&'static EnumVariantModel> {
        self.variants.iter().find(|v| names_eq(v.name, name))
    }

    /// Find an enum member by discriminant.
    #[must_use]
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&'static EnumVariantModel> {
        self.variants
            .iter()
            .find(|v| v.discriminant == discriminant)
    }
}

///
/// TESTS
///
