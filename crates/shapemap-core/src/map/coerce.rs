use crate::{
    config::MapperConfig,
    error::ConversionError,
    map::{
        matcher::{MatchResult, SourceMatch},
        report::{Conversion, SkipReason},
    },
    model::PropertyModel,
    value::{TypeTag, Value, ValueEnum},
};

///
/// Coercion
/// What to do with one destination property after matching.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Coercion {
    Assign {
        source: &'static str,
        value: Value,
        conversion: Conversion,
    },
    Skip(SkipReason),
}

/// Decide the value to assign to `dest` for `matched`.
///
/// Exact matches copy unchanged. Name-only matches into an enum parse the
/// source's canonical text; every other name-only match hands the raw value
/// to the destination setter, which may still reject it.
pub fn coerce(
    dest: &PropertyModel,
    matched: MatchResult,
    config: &MapperConfig,
) -> Result<Coercion, ConversionError> {
    match matched {
        MatchResult::NoMatch => Ok(Coercion::Skip(SkipReason::NoMatch)),

        MatchResult::Exact(SourceMatch {
            property, value, ..
        }) => Ok(Coercion::Assign {
            source: property.name,
            value,
            conversion: Conversion::Direct,
        }),

        MatchResult::NameOnly(SourceMatch {
            property, value, ..
        }) if dest.is_enum() => {
            let text = value.canonical_string().unwrap_or_default();
            if text.is_empty() {
                return Ok(Coercion::Skip(SkipReason::EmptyEnumText));
            }

            Ok(Coercion::Assign {
                source: property.name,
                value: parse_enum(dest, &text, config.enum_numeric_fallback)?,
                conversion: Conversion::EnumParse,
            })
        }

        // Unconstrained and constrained destinations take the same
        // best-effort path; only the setter decides.
        MatchResult::NameOnly(SourceMatch {
            property, value, ..
        }) => Ok(Coercion::Assign {
            source: property.name,
            value: widen(dest, value),
            conversion: Conversion::BestEffort,
        }),
    }
}

/// Lossless integer widening toward `dest`'s tag.
///
/// Every other value is returned unchanged.
#[must_use]
pub fn widen(dest: &PropertyModel, value: Value) -> Value {
    match (dest.tag, value) {
        (TypeTag::Int32, Value::Int16(v)) => Value::Int32(v.into()),
        (TypeTag::Int64, Value::Int16(v)) => Value::Int64(v.into()),
        (TypeTag::Int64, Value::Int32(v)) => Value::Int64(v.into()),
        (_, value) => value,
    }
}

/// Resolve `text` to a member of `dest`'s enum, ignoring case.
///
/// With `numeric_fallback`, an integer literal naming a member's
/// discriminant resolves to that member.
pub fn parse_enum(
    dest: &PropertyModel,
    text: &str,
    numeric_fallback: bool,
) -> Result<Value, ConversionError> {
    let trimmed = text.trim();

    let member = dest.variant(trimmed).or_else(|| {
        numeric_fallback
            .then(|| trimmed.parse::<i64>().ok())
            .flatten()
            .and_then(|d| dest.variant_by_discriminant(d))
    });

    member
        .map(|m| Value::Enum(ValueEnum::loose(m.name)))
        .ok_or_else(|| ConversionError::enum_parse(dest, text))
}

///
/// TESTS
///
