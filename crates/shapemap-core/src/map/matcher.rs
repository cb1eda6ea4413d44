use crate::{
    config::MapperConfig,
    map::{ExclusionSet, MapMode, report::SkipReason},
    model::{PropertyModel, names_eq},
    traits::Mappable,
    value::Value,
};

///
/// MatchRules
///
/// Effective filtering for one pass: the exclusion set after implicit
/// additions, and whether navigation properties are screened out.
///

#[derive(Debug)]
pub struct MatchRules<'a> {
    pub mode: MapMode,
    pub exclusions: ExclusionSet,
    pub config: &'a MapperConfig,
}

impl<'a> MatchRules<'a> {
    #[must_use]
    pub fn new(mode: MapMode, caller: &ExclusionSet, config: &'a MapperConfig) -> Self {
        Self {
            mode,
            exclusions: caller.effective(mode, config),
            config,
        }
    }

    /// Reason a property on either side never participates, if any.
    #[must_use]
    pub fn screen(&self, property: &PropertyModel) -> Option<SkipReason> {
        if self.mode == MapMode::Entity && self.config.is_navigation(property.supertype) {
            return Some(SkipReason::Navigation);
        }
        if self.exclusions.contains(property.name) {
            return Some(SkipReason::Excluded);
        }

        None
    }
}

///
/// SourceMatch
///

#[derive(Clone, Debug, PartialEq)]
pub struct SourceMatch {
    pub index: usize,
    pub property: &'static PropertyModel,
    /// Source value read during the scan; never `Null`.
    pub value: Value,
}

///
/// MatchResult
///

#[derive(Clone, Debug, PartialEq)]
pub enum MatchResult {
    NoMatch,
    /// Same name and same declared type.
    Exact(SourceMatch),
    /// Same name, different declared type.
    NameOnly(SourceMatch),
}

/// Pair `dest` with the first eligible source property of the same name.
///
/// Source properties are scanned in declaration order. Excluded and
/// navigation properties are passed over, as are properties whose current
/// value is null. The first name match ends the scan.
pub fn match_property<S: Mappable>(
    dest: &PropertyModel,
    source: &S,
    rules: &MatchRules<'_>,
) -> MatchResult {
    if rules.screen(dest).is_some() {
        return MatchResult::NoMatch;
    }

    for (index, candidate) in S::MODEL.properties.iter().enumerate() {
        if rules.screen(candidate).is_some() || !names_eq(candidate.name, dest.name) {
            continue;
        }

        let value = source.get_value(index).unwrap_or(Value::Null);
        if value.is_null() {
            continue;
        }

        let found = SourceMatch {
            index,
            property: candidate,
            value,
        };

        return if dest.same_declared_type(candidate) {
            MatchResult::Exact(found)
        } else {
            MatchResult::NameOnly(found)
        };
    }

    MatchResult::NoMatch
}

///
/// TESTS
///
