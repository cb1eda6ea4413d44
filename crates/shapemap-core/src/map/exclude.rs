use crate::{
    config::MapperConfig,
    map::MapMode,
    model::fold_name,
};
use std::collections::BTreeSet;

///
/// ExclusionSet
///
/// Property names that never participate in a mapping pass.
/// Membership is case-insensitive; insertion order is irrelevant.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExclusionSet {
    folded: BTreeSet<String>,
}

impl ExclusionSet {
    /// Empty set: every property is eligible.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            folded: BTreeSet::new(),
        }
    }

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().collect()
    }

    pub fn insert(&mut self, name: impl AsRef<str>) {
        self.folded.insert(fold_name(name.as_ref()));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.folded.contains(&fold_name(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Set actually applied by a pass in `mode`.
    ///
    /// Generic mode takes the caller's set verbatim. Entity-aware mode always
    /// adds the configured implicit names, even to an empty set.
    #[must_use]
    pub fn effective(&self, mode: MapMode, config: &MapperConfig) -> Self {
        match mode {
            MapMode::Generic => self.clone(),
            MapMode::Entity => {
                let mut set = self.clone();
                for name in &config.implicit_excludes {
                    set.insert(name);
                }
                set
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::none();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

/// Whether `name` is excluded by `set`.
#[must_use]
pub fn is_excluded(name: &str, set: &ExclusionSet) -> bool {
    set.contains(name)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_ignores_case() {
        let set = ExclusionSet::new(["Model", "year"]);

        assert!(is_excluded("MODEL", &set));
        assert!(is_excluded("Year", &set));
        assert!(!is_excluded("TopSpeed", &set));
    }

    #[test]
    fn empty_generic_set_excludes_nothing() {
        let effective = ExclusionSet::none().effective(MapMode::Generic, &MapperConfig::default());

        assert!(effective.is_empty());
        assert!(!effective.contains("Id"));
    }

    #[test]
    fn entity_mode_always_adds_identity_names() {
        let config = MapperConfig::default();

        let from_empty = ExclusionSet::none().effective(MapMode::Entity, &config);
        assert!(from_empty.contains("id"));
        assert!(from_empty.contains("ENTITYKEY"));
        assert_eq!(from_empty.len(), 2);

        let from_caller = ExclusionSet::new(["Model", "ID"]).effective(MapMode::Entity, &config);
        assert!(from_caller.contains("Model"));
        assert_eq!(from_caller.len(), 3);
    }

    #[test]
    fn effective_does_not_mutate_caller_set() {
        let caller = ExclusionSet::new(["Model"]);
        let _ = caller.effective(MapMode::Entity, &MapperConfig::default());

        assert_eq!(caller.len(), 1);
    }
}
