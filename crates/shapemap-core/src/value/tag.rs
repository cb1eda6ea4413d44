use serde::Serialize;
use std::fmt::{self, Display};

///
/// TypeTag
///
/// Semantic classification of a declared property type.
/// Coercion dispatches on this tag, never on type-name strings.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum TypeTag {
    Int16,
    Int32,
    Int64,
    Decimal,
    Bool,
    Text,
    Enum,
    Other,
}

impl TypeTag {
    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Decimal => "Decimal",
            Self::Bool => "Boolean",
            Self::Text => "String",
            Self::Enum => "Enum",
            Self::Other => "Other",
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
