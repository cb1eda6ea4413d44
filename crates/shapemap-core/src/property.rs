//! Single-property access by name.
//!
//! Lookups here are exact-case, unlike the mapping passes.

use crate::{
    error::{ConversionError, ErrorOrigin, MapError},
    map::{Mapper, default_mapper, parse_enum},
    model::PropertyModel,
    traits::Mappable,
    value::{TypeTag, Value},
};

impl Mapper {
    /// Parse `text` into the property `name` of `obj` and return `obj`.
    ///
    /// Unknown names and empty text leave `obj` unchanged. Parse and
    /// assignment failures fail the call.
    pub fn set_property<T: Mappable>(
        &self,
        mut obj: T,
        name: &str,
        text: &str,
    ) -> Result<T, MapError> {
        if text.is_empty() {
            return Ok(obj);
        }
        let Some((index, property)) = T::MODEL.property(name) else {
            return Ok(obj);
        };

        let value = parse_text(property, text, self.config().enum_numeric_fallback)
            .map_err(|err| MapError::conversion(ErrorOrigin::Property, err))?;

        if let Some(value) = value {
            obj.set_value(index, value)
                .map_err(|err| MapError::conversion(ErrorOrigin::Property, err))?;
        }

        Ok(obj)
    }

    /// Current value of the property `name`, `None` when `name` is empty or
    /// unknown. A present property holding no value yields `Value::Null`.
    #[must_use]
    pub fn get_property<T: Mappable>(&self, obj: &T, name: &str) -> Option<Value> {
        if name.is_empty() {
            return None;
        }

        let (index, _) = T::MODEL.property(name)?;
        obj.get_value(index)
    }
}

/// Dispatch on the declared type; `None` means no assignment.
fn parse_text(
    property: &PropertyModel,
    text: &str,
    enum_numeric_fallback: bool,
) -> Result<Option<Value>, ConversionError> {
    let value = match property.tag {
        TypeTag::Enum => parse_enum(property, text, enum_numeric_fallback)?,
        TypeTag::Bool => Value::Bool(
            parse_bool_literal(text).ok_or_else(|| ConversionError::parse(property, text))?,
        ),
        TypeTag::Int32 => Value::Int32(
            text.trim()
                .parse()
                .map_err(|_| ConversionError::parse(property, text))?,
        ),
        TypeTag::Text => Value::text(text),
        _ if !property.supertype.is_unconstrained() => Value::text(text),
        _ => return Ok(None),
    };

    Ok(Some(value))
}

/// Strict boolean literal: `true` or `false`, any case, surrounding
/// whitespace ignored.
#[must_use]
pub fn parse_bool_literal(text: &str) -> Option<bool> {
    let trimmed = text.trim();

    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Default-configuration shorthand for [`Mapper::set_property`].
pub fn set_property<T: Mappable>(obj: T, name: &str, text: &str) -> Result<T, MapError> {
    default_mapper().set_property(obj, name, text)
}

/// Default-configuration shorthand for [`Mapper::get_property`].
#[must_use]
pub fn get_property<T: Mappable>(obj: &T, name: &str) -> Option<Value> {
    default_mapper().get_property(obj, name)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{Color, Colored, Garage};

    #[test]
    fn sets_each_supported_kind() {
        let garage = Garage::default();
        let garage = set_property(garage, "Capacity", " 42 ").expect("int");
        let garage = set_property(garage, "Open", "TRUE").expect("bool");
        let garage = set_property(garage, "Color", "teal").expect("text");

        assert_eq!(garage.capacity, 42);
        assert!(garage.open);
        assert_eq!(garage.color, "teal");
    }

    #[test]
    fn enum_text_is_matched_ignoring_case() {
        let colored = set_property(Colored::default(), "Color", "deepblue").expect("enum");

        assert_eq!(colored.color, Color::DeepBlue);
    }

    #[test]
    fn unknown_name_and_empty_text_are_no_ops() {
        let garage = Garage {
            capacity: 3,
            ..Garage::default()
        };

        let garage = set_property(garage, "Nope", "9").expect("unknown name");
        let garage = set_property(garage, "Capacity", "").expect("empty text");
        let garage = set_property(garage, "capacity", "9").expect("lookup is exact");

        assert_eq!(garage.capacity, 3);
    }

    #[test]
    fn malformed_literals_fail_the_call() {
        let err = set_property(Garage::default(), "Capacity", "4.2").expect_err("not an int");
        assert!(err.is_conversion());
        assert!(matches!(
            err.detail,
            Some(ConversionError::Parse {
                expected: TypeTag::Int32,
                ..
            })
        ));

        assert!(set_property(Garage::default(), "Open", "1").is_err());
        assert!(set_property(Colored::default(), "Color", "Mauve").is_err());
    }

    #[test]
    fn constrained_other_types_get_raw_text() {
        // f64 is a value type: the text is offered to the setter, which rejects it.
        let err = set_property(Garage::default(), "Rating", "3.5").expect_err("setter rejects");
        assert!(matches!(
            err.detail,
            Some(ConversionError::Rejected { found: "Text", .. })
        ));
    }

    #[test]
    fn unconstrained_other_types_are_left_alone() {
        let garage = set_property(Garage::default(), "Photo", "ff00").expect("no assignment");

        assert!(garage.photo.is_empty());
    }

    #[test]
    fn get_property_reads_by_exact_name() {
        let garage = Garage {
            capacity: 8,
            ..Garage::default()
        };

        assert_eq!(get_property(&garage, "Capacity"), Some(Value::Int32(8)));
        assert_eq!(get_property(&garage, "capacity"), None);
        assert_eq!(get_property(&garage, ""), None);
        assert_eq!(get_property(&garage, "Owner"), Some(Value::Null));
    }

    #[test]
    fn bool_literals_are_strict() {
        assert_eq!(parse_bool_literal(" False "), Some(false));
        assert_eq!(parse_bool_literal("yes"), None);
        assert_eq!(parse_bool_literal("1"), None);
    }
}
