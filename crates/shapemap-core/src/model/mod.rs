//! Runtime type models.
//!
//! A `TypeModel` is the static, ordered descriptor of one mappable shape,
//! normally emitted by `#[derive(Mappable)]`. Models are built at compile
//! time, so introspection never allocates and never needs a live value.
//!
//! Property order is the field declaration order captured by the derive;
//! first-match-wins scanning depends on it.

mod property;
mod registry;
mod type_model;

pub use property::{EnumVariantModel, PropertyModel, Supertype};
pub use registry::validated_model;
pub use type_model::TypeModel;

/// Case-insensitive name equality using Unicode simple lowercasing.
/// Locale-independent; the same answer on every host.
#[must_use]
pub fn names_eq(left: &str, right: &str) -> bool {
    if left.len() == right.len() && left.eq_ignore_ascii_case(right) {
        return true;
    }

    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Folded form of `name` used as a set key; equal iff `names_eq`.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

///
/// TESTS
///
