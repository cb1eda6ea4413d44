mod tag;


use crate::types::Decimal;
use serde::Serialize;
use std::fmt::Write as _;

// re-exports
pub use tag::TypeTag;

///
/// Value
///
/// Dynamic carrier for one property value moving between two shapes.
///
/// Null   → the property holds no value (`Option::None`, database null).
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Decimal(Decimal),
    Enum(ValueEnum),
    Float64(f64),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Null,
    Text(String),
    Uint64(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::Text` from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Semantic tag of the carried value; `None` for `Null`.
    #[must_use]
    pub const fn tag(&self) -> Option<TypeTag> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(TypeTag::Bool),
            Self::Decimal(_) => Some(TypeTag::Decimal),
            Self::Enum(_) => Some(TypeTag::Enum),
            Self::Int16(_) => Some(TypeTag::Int16),
            Self::Int32(_) => Some(TypeTag::Int32),
            Self::Int64(_) => Some(TypeTag::Int64),
            Self::Text(_) => Some(TypeTag::Text),
            Self::Blob(_) | Self::Float64(_) | Self::Uint64(_) => Some(TypeTag::Other),
        }
    }

    /// Variant label used in diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Blob(_) => "Blob",
            Self::Bool(_) => "Bool",
            Self::Decimal(_) => "Decimal",
            Self::Enum(_) => "Enum",
            Self::Float64(_) => "Float64",
            Self::Int16(_) => "Int16",
            Self::Int32(_) => "Int32",
            Self::Int64(_) => "Int64",
            Self::Null => "Null",
            Self::Text(_) => "Text",
            Self::Uint64(_) => "Uint64",
        }
    }

    ///
    /// TEXT
    ///

    /// Canonical string representation, `None` for `Null`.
    ///
    /// Booleans render as `True`/`False`, blobs as lower-case hex and enums
    /// as their variant name.
    #[must_use]
    pub fn canonical_string(&self) -> Option<String> {
        let text = match self {
            Self::Null => return None,
            Self::Blob(bytes) => bytes.iter().fold(
                String::with_capacity(bytes.len() * 2),
                |mut out, byte| {
                    let _ = write!(out, "{byte:02x}");
                    out
                },
            ),
            Self::Bool(true) => "True".to_string(),
            Self::Bool(false) => "False".to_string(),
            Self::Decimal(v) => v.to_string(),
            Self::Enum(v) => v.variant.clone(),
            Self::Float64(v) => v.to_string(),
            Self::Int16(v) => v.to_string(),
            Self::Int32(v) => v.to_string(),
            Self::Int64(v) => v.to_string(),
            Self::Text(v) => v.clone(),
            Self::Uint64(v) => v.to_string(),
        };

        Some(text)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

///
/// ValueEnum
/// enum member by variant name; `path` is optional so coercion can build
/// a loose value that any enum with a matching variant accepts.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ValueEnum {
    pub variant: String,
    pub path: Option<String>,
}

impl ValueEnum {
    #[must_use]
    /// Build an enum value bound to the enum type at `path`.
    pub fn new(variant: &str, path: Option<&str>) -> Self {
        Self {
            variant: variant.to_string(),
            path: path.map(ToString::to_string),
        }
    }

    #[must_use]
    /// Build an enum value that ignores the path for matching.
    pub fn loose(variant: &str) -> Self {
        Self::new(variant, None)
    }

    /// Whether this value may be accepted by the enum type at `path`.
    #[must_use]
    pub fn accepts_path(&self, path: &str) -> bool {
        self.path.as_deref().is_none_or(|own| own == path)
    }
}
