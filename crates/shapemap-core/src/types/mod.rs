//! Value types that need more than a primitive to round-trip through
//! [`Value`](crate::value::Value).

mod decimal;
mod entity_ref;

pub use decimal::Decimal;
pub use entity_ref::EntityRef;
