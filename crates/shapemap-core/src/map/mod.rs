//! Mapping passes between two shapes.
//!
//! Every pass drives the same pipeline once per destination property:
//! exclusion screen → match against source properties → coerce → assign.

mod coerce;
mod exclude;
mod matcher;
pub(crate) mod pass;
mod report;


pub use coerce::{Coercion, coerce, parse_enum, widen};
pub use exclude::{ExclusionSet, is_excluded};
pub use matcher::{MatchResult, MatchRules, SourceMatch, match_property};
pub use report::{Conversion, MapReport, PropertyOutcome, PropertyStatus, SkipReason};

use crate::{
    config::MapperConfig, error::MapError, obs::sink::PassKind, traits::Mappable,
};
use std::sync::LazyLock;

static DEFAULT_MAPPER: LazyLock<Mapper> = LazyLock::new(Mapper::default);

/// Shared mapper with the default configuration.
pub(crate) fn default_mapper() -> &'static Mapper {
    &DEFAULT_MAPPER
}

///
/// MapMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MapMode {
    /// Caller exclusions only; every property type participates.
    Generic,
    /// Implicit identity exclusions and navigation screening.
    Entity,
}

impl MapMode {
    const fn pass_kind(self) -> PassKind {
        match self {
            Self::Generic => PassKind::Generic,
            Self::Entity => PassKind::Entity,
        }
    }
}

///
/// Mapper
///
/// Entry point for all mapping operations under one configuration.
///

#[derive(Clone, Debug, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    #[must_use]
    pub const fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, MapError> {
        Ok(Self::new(MapperConfig::from_toml_str(source)?))
    }

    #[must_use]
    pub const fn config(&self) -> &MapperConfig {
        &self.config
    }

    ///
    /// CREATE AND MAP
    ///

    /// Build a new `D` from `source`; exclusions are taken verbatim.
    pub fn create_and_map<D, S>(&self, source: &S, excludes: &ExclusionSet) -> Result<D, MapError>
    where
        D: Mappable + Default,
        S: Mappable,
    {
        self.create_and_map_with_report(source, excludes)
            .map(|(dest, _)| dest)
    }

    pub fn create_and_map_with_report<D, S>(
        &self,
        source: &S,
        excludes: &ExclusionSet,
    ) -> Result<(D, MapReport), MapError>
    where
        D: Mappable + Default,
        S: Mappable,
    {
        self.create(MapMode::Generic, source, excludes)
    }

    /// Build a new `D` from `source` in entity-aware mode.
    pub fn create_and_map_entity<D, S>(
        &self,
        source: &S,
        excludes: &ExclusionSet,
    ) -> Result<D, MapError>
    where
        D: Mappable + Default,
        S: Mappable,
    {
        self.create_and_map_entity_with_report(source, excludes)
            .map(|(dest, _)| dest)
    }

    pub fn create_and_map_entity_with_report<D, S>(
        &self,
        source: &S,
        excludes: &ExclusionSet,
    ) -> Result<(D, MapReport), MapError>
    where
        D: Mappable + Default,
        S: Mappable,
    {
        self.create(MapMode::Entity, source, excludes)
    }

    ///
    /// MAP INTO
    ///

    /// Populate an existing `destination` in entity-aware mode and return it.
    pub fn map_into_entity<S, D>(
        &self,
        source: &S,
        mut destination: D,
        excludes: &ExclusionSet,
    ) -> Result<D, MapError>
    where
        S: Mappable,
        D: Mappable,
    {
        self.map_into_entity_with_report(source, &mut destination, excludes)?;

        Ok(destination)
    }

    pub fn map_into_entity_with_report<S, D>(
        &self,
        source: &S,
        destination: &mut D,
        excludes: &ExclusionSet,
    ) -> Result<MapReport, MapError>
    where
        S: Mappable,
        D: Mappable,
    {
        self.map_into(MapMode::Entity, source, destination, excludes)
    }

    /// Populate an existing `destination` under any mode.
    pub fn map_into<S, D>(
        &self,
        mode: MapMode,
        source: &S,
        destination: &mut D,
        excludes: &ExclusionSet,
    ) -> Result<MapReport, MapError>
    where
        S: Mappable,
        D: Mappable,
    {
        let rules = MatchRules::new(mode, excludes, &self.config);

        pass::sweep(source, destination, &rules, mode.pass_kind())
    }

    ///
    /// BIND
    ///

    /// Build a new `D` by copying exact-name properties verbatim.
    pub fn bind<D, S>(&self, source: &S) -> Result<D, MapError>
    where
        D: Mappable + Default,
        S: Mappable,
    {
        self.bind_with_report(source).map(|(dest, _)| dest)
    }

    pub fn bind_with_report<D, S>(&self, source: &S) -> Result<(D, MapReport), MapError>
    where
        D: Mappable + Default,
        S: Mappable,
    {
        let mut dest = D::default();
        let report = pass::bind(source, &mut dest)?;

        Ok((dest, report))
    }

    fn create<D, S>(
        &self,
        mode: MapMode,
        source: &S,
        excludes: &ExclusionSet,
    ) -> Result<(D, MapReport), MapError>
    where
        D: Mappable + Default,
        S: Mappable,
    {
        let mut dest = D::default();
        let report = self.map_into(mode, source, &mut dest, excludes)?;

        Ok((dest, report))
    }
}

///
/// FREE FUNCTIONS
/// Default-configuration shorthands.
///

/// Build a new `D` from `source`; exclusions are taken verbatim.
pub fn create_and_map<D, S>(source: &S, excludes: &ExclusionSet) -> Result<D, MapError>
where
    D: Mappable + Default,
    S: Mappable,
{
    default_mapper().create_and_map(source, excludes)
}

/// Build a new `D` from `source`, skipping `Id`, `EntityKey` and navigation
/// properties in addition to `excludes`.
pub fn create_and_map_entity<D, S>(source: &S, excludes: &ExclusionSet) -> Result<D, MapError>
where
    D: Mappable + Default,
    S: Mappable,
{
    default_mapper().create_and_map_entity(source, excludes)
}

/// Populate and return `destination` under entity-aware rules.
pub fn map_into_entity<S, D>(
    source: &S,
    destination: D,
    excludes: &ExclusionSet,
) -> Result<D, MapError>
where
    S: Mappable,
    D: Mappable,
{
    default_mapper().map_into_entity(source, destination, excludes)
}

/// Build a new `D` by copying exact-name properties verbatim.
pub fn bind<D, S>(source: &S) -> Result<D, MapError>
where
    D: Mappable + Default,
    S: Mappable,
{
    default_mapper().bind(source)
}
