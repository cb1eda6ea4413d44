use crate::{
    model::Supertype,
    traits::FieldValue,
    value::{TypeTag, Value},
};
use std::{fmt, marker::PhantomData};

///
/// EntityRef
///
/// Relational navigation reference to another entity, carried by key.
/// Entity-aware mapping never traverses or copies these properties.
///
/// Generic marker wrappers never derive Copy or Clone; both are
/// implemented manually so `E` needs no bounds.
///

pub struct EntityRef<E> {
    key: Option<i64>,
    _marker: PhantomData<fn() -> E>,
}

impl<E> EntityRef<E> {
    /// Supertype name reported for navigation references.
    pub const SUPERTYPE_NAME: &'static str = "EntityReference";

    #[must_use]
    pub const fn new(key: i64) -> Self {
        Self {
            key: Some(key),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn unset() -> Self {
        Self {
            key: None,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn key(&self) -> Option<i64> {
        self.key
    }
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<E> Clone for EntityRef<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EntityRef<E> {}

impl<E> Default for EntityRef<E> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<E> PartialEq for EntityRef<E> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<E> Eq for EntityRef<E> {}

impl<E> fmt::Debug for EntityRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityRef").field(&self.key).finish()
    }
}

impl<E> FieldValue for EntityRef<E> {
    const TAG: TypeTag = TypeTag::Other;
    const SUPERTYPE: Supertype = Supertype::Named(Self::SUPERTYPE_NAME);

    fn to_value(&self) -> Value {
        self.key.map_or(Value::Null, Value::Int64)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::unset()),
            Value::Int64(key) => Some(Self::new(*key)),
            _ => None,
        }
    }
}
