//! Mapper configuration.
//!
//! Defaults reproduce the entity-aware conventions: `Id` and `EntityKey`
//! are never copied, and ORM navigation bases are never traversed.

use crate::model::{Supertype, names_eq};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Names implicitly excluded by entity-aware mapping.
pub const DEFAULT_IMPLICIT_EXCLUDES: [&str; 2] = ["Id", "EntityKey"];

/// Supertype names treated as relational navigation in entity-aware mapping.
pub const DEFAULT_NAVIGATION_SUPERTYPES: [&str; 3] =
    ["EntityObject", "EntityReference", "RelatedEnd"];

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid mapper config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid mapper config: {field} contains an empty name")]
    EmptyName { field: &'static str },
}

///
/// MapperConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// Names added to the caller's exclusions in entity-aware mode.
    pub implicit_excludes: Vec<String>,
    /// Supertype names skipped on both sides in entity-aware mode.
    pub navigation_supertypes: Vec<String>,
    /// Let enum coercion resolve a numeric string by discriminant.
    pub enum_numeric_fallback: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            implicit_excludes: DEFAULT_IMPLICIT_EXCLUDES.map(String::from).to_vec(),
            navigation_supertypes: DEFAULT_NAVIGATION_SUPERTYPES.map(String::from).to_vec(),
            enum_numeric_fallback: true,
        }
    }
}

impl MapperConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.implicit_excludes.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyName {
                field: "implicit_excludes",
            });
        }
        if self.navigation_supertypes.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyName {
                field: "navigation_supertypes",
            });
        }

        Ok(())
    }

    /// Whether `supertype` names a navigation/proxy base.
    #[must_use]
    pub fn is_navigation(&self, supertype: Supertype) -> bool {
        let Supertype::Named(name) = supertype else {
            return false;
        };

        self.navigation_supertypes
            .iter()
            .any(|nav| names_eq(nav, name))
    }
}

///
/// TESTS
///
