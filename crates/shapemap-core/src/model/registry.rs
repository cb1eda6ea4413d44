//! Process-wide cache of validated type models.
//!
//! Keyed by `TypeId`. Validation is pure, so concurrent first requests for
//! the same type may both compute; they publish identical results.

use crate::{
    error::{ErrorClass, ErrorOrigin, MapError},
    model::TypeModel,
    traits::Mappable,
};
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{LazyLock, PoisonError, RwLock},
};

static VALIDATED: LazyLock<RwLock<HashMap<TypeId, Result<(), String>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Return `T`'s model after checking it once per process.
pub fn validated_model<T: Mappable>() -> Result<&'static TypeModel, MapError> {
    let id = TypeId::of::<T>();

    let cached = VALIDATED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .cloned();

    let outcome = if let Some(outcome) = cached {
        outcome
    } else {
        let outcome = T::MODEL.validate().map_err(|err| err.message);
        VALIDATED
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_insert(outcome)
            .clone()
    };

    outcome
        .map(|()| T::MODEL)
        .map_err(|message| MapError::new(ErrorClass::Operation, ErrorOrigin::Model, message))
}

///
/// TESTS
///
