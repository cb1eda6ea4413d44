use crate::{
    error::ConversionError,
    model::{EnumVariantModel, Supertype, TypeModel},
    value::{TypeTag, Value},
};

// ============================================================================
// SHAPES
// ============================================================================
//
// These traits describe *what a type exposes* to the mapper.
//

///
/// Mappable
///
/// A shape whose properties can be enumerated, read and written by index.
/// Index `i` always refers to `MODEL.properties[i]`.
///
/// Normally derived with `#[derive(Mappable)]`.
///

pub trait Mappable: 'static {
    const MODEL: &'static TypeModel;

    /// Current value of property `index`, `None` for an unknown index.
    fn get_value(&self, index: usize) -> Option<Value>;

    /// Assign property `index`.
    /// Setters are strict: a value of the wrong kind is rejected, never
    /// converted.
    fn set_value(&mut self, index: usize, value: Value) -> Result<(), ConversionError>;
}

///
/// MapEnum
///
/// Fieldless enum whose members are addressable by name and discriminant.
///

pub trait MapEnum: Sized {
    /// Fully-qualified enum type path.
    const PATH: &'static str;
    const MEMBERS: &'static [EnumVariantModel];

    fn variant_name(&self) -> &'static str;

    /// Exact, case-sensitive member lookup.
    fn from_variant_name(name: &str) -> Option<Self>;
}

// ============================================================================
// VALUES
// ============================================================================

///
/// FieldValue
///
/// Conversion boundary between a property's Rust type and `Value`.
/// The associated constants feed the static property model.
///

pub trait FieldValue: Sized {
    const TAG: TypeTag;
    const SUPERTYPE: Supertype;
    const NULLABLE: bool = false;
    const VARIANTS: &'static [EnumVariantModel] = &[];

    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    const TAG: TypeTag = TypeTag::Text;
    const SUPERTYPE: Supertype = Supertype::Object;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FieldValue for Vec<u8> {
    const TAG: TypeTag = TypeTag::Other;
    const SUPERTYPE: Supertype = Supertype::Object;

    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Blob(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const TAG: TypeTag = T::TAG;
    const SUPERTYPE: Supertype = T::SUPERTYPE;
    const NULLABLE: bool = true;
    const VARIANTS: &'static [EnumVariantModel] = T::VARIANTS;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident, $tag:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                const TAG: TypeTag = TypeTag::$tag;
                const SUPERTYPE: Supertype = Supertype::Value;

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    bool => Bool, Bool,
    i16 => Int16, Int16,
    i32 => Int32, Int32,
    i64 => Int64, Int64,
    u64 => Uint64, Other,
    f64 => Float64, Other,
);

///
/// TESTS
///
