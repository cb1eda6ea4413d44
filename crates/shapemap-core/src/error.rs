use crate::{config::ConfigError, model::PropertyModel, value::TypeTag, value::Value};
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// MapError
///
/// Whole-call failure surfaced to the caller.
/// Per-property conversion failures inside a mapping pass never become a
/// `MapError`; they are recorded in the pass report instead.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct MapError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Conversion detail, present when `class` is `Conversion`.
    pub detail: Option<ConversionError>,
}

impl MapError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct an invalid-argument error for input the call cannot consume.
    pub(crate) fn invalid_argument(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidArgument, origin, message)
    }

    /// Construct an operation failure that aborts the call.
    pub(crate) fn operation(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::Operation,
            origin,
            format!("error while populating properties: {}", message.into()),
        )
    }

    /// Promote a property conversion failure to a whole-call error.
    pub(crate) fn conversion(origin: ErrorOrigin, err: ConversionError) -> Self {
        Self {
            class: ErrorClass::Conversion,
            origin,
            message: format!("error while populating property: {err}"),
            detail: Some(err),
        }
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.class, ErrorClass::InvalidArgument)
    }

    #[must_use]
    pub const fn is_conversion(&self) -> bool {
        matches!(self.class, ErrorClass::Conversion)
    }

    #[must_use]
    pub const fn is_operation(&self) -> bool {
        matches!(self.class, ErrorClass::Operation)
    }
}

impl From<ConfigError> for MapError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorClass::InvalidArgument, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ErrorClass {
    InvalidArgument,
    Conversion,
    Operation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Conversion => "conversion",
            Self::Operation => "operation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Map,
    Model,
    Property,
    Rows,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Map => "map",
            Self::Model => "model",
            Self::Property => "property",
            Self::Rows => "rows",
        };
        write!(f, "{label}")
    }
}

///
/// ConversionError
///
/// Failure to convert or assign one property value.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, ThisError)]
pub enum ConversionError {
    #[error("property '{property}': '{text}' is not a variant of {type_name}")]
    EnumParse {
        property: String,
        type_name: String,
        text: String,
    },

    #[error("property '{property}': '{text}' is not a valid {expected} literal")]
    Parse {
        property: String,
        expected: TypeTag,
        text: String,
    },

    #[error("property '{property}' of type {type_name} rejected a {found} value")]
    Rejected {
        property: String,
        type_name: String,
        found: &'static str,
    },

    #[error("no property at index {index}")]
    UnknownProperty { index: usize },
}

impl ConversionError {
    /// Build the error a setter returns when it cannot accept `value`.
    #[must_use]
    pub fn rejected(property: &PropertyModel, value: &Value) -> Self {
        Self::Rejected {
            property: property.name.to_string(),
            type_name: property.type_name.to_string(),
            found: value.kind_label(),
        }
    }

    pub(crate) fn enum_parse(property: &PropertyModel, text: &str) -> Self {
        Self::EnumParse {
            property: property.name.to_string(),
            type_name: property.type_name.to_string(),
            text: text.to_string(),
        }
    }

    pub(crate) fn parse(property: &PropertyModel, text: &str) -> Self {
        Self::Parse {
            property: property.name.to_string(),
            expected: property.tag,
            text: text.to_string(),
        }
    }

    /// Returns the property name this failure belongs to, if known.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::EnumParse { property, .. }
            | Self::Parse { property, .. }
            | Self::Rejected { property, .. } => Some(property),
            Self::UnknownProperty { .. } => None,
        }
    }
}

///
/// TESTS
///
