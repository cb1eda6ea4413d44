use crate::{
    error::{ErrorOrigin, MapError},
    model::{PropertyModel, names_eq},
};

///
/// TypeModel
/// Minimal, macro-generated runtime descriptor for one mappable shape.
///

#[derive(Debug)]
pub struct TypeModel {
    /// Fully-qualified Rust type path (for diagnostics and metrics).
    pub path: &'static str,
    /// Ordered property list (declaration order, authoritative for matching).
    pub properties: &'static [PropertyModel],
}

impl TypeModel {
    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<(usize, &'static PropertyModel)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, p)| p.name == name)
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<(usize, &'static PropertyModel)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, p)| names_eq(p.name, name))
    }

    /// Reject models with an unnamed property.
    ///
    /// Names that differ only by case are allowed; matching takes the
    /// first candidate in declaration order.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.properties.iter().any(|p| p.name.is_empty()) {
            return Err(MapError::operation(
                ErrorOrigin::Model,
                format!("{} declares a property with an empty name", self.path),
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///
