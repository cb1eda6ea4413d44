use crate::error::ConversionError;
use serde::Serialize;

///
/// Conversion
/// How an assigned value got from the source shape to the destination.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Conversion {
    /// Declared types agree; value copied unchanged.
    Direct,
    /// Source text parsed into a destination enum member.
    EnumParse,
    /// Declared types differ; value handed to the destination setter as-is.
    BestEffort,
    /// Tabular cell text parsed permissively into the destination type.
    CellParse,
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum SkipReason {
    Excluded,
    Navigation,
    NoMatch,
    /// Enum destination matched a source whose text form is empty.
    EmptyEnumText,
    /// Null cell for a property that cannot hold null; the default stays.
    NullCell,
}

///
/// PropertyStatus
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PropertyStatus {
    Assigned {
        source: &'static str,
        conversion: Conversion,
    },
    Skipped(SkipReason),
    Failed(ConversionError),
}

///
/// PropertyOutcome
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyOutcome {
    pub property: &'static str,
    pub status: PropertyStatus,
}

///
/// MapReport
///
/// Per-property record of one mapping pass, in destination declaration
/// order. Properties that were skipped or failed keep their prior value.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MapReport {
    pub source_path: &'static str,
    pub dest_path: &'static str,
    pub outcomes: Vec<PropertyOutcome>,
}

impl MapReport {
    #[must_use]
    pub const fn new(source_path: &'static str, dest_path: &'static str) -> Self {
        Self {
            source_path,
            dest_path,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, property: &'static str, status: PropertyStatus) {
        self.outcomes.push(PropertyOutcome { property, status });
    }

    /// Outcome recorded for `property` (exact name).
    #[must_use]
    pub fn outcome(&self, property: &str) -> Option<&PropertyStatus> {
        self.outcomes
            .iter()
            .find(|o| o.property == property)
            .map(|o| &o.status)
    }

    /// Names of the properties that received a value.
    pub fn assigned(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, PropertyStatus::Assigned { .. }))
            .map(|o| o.property)
    }

    /// Conversion failures, in destination order.
    pub fn failed(&self) -> impl Iterator<Item = (&'static str, &ConversionError)> + '_ {
        self.outcomes.iter().filter_map(|o| match &o.status {
            PropertyStatus::Failed(err) => Some((o.property, err)),
            _ => None,
        })
    }

    /// True when no property failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed().next().is_none()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MapReport {
        let mut report = MapReport::new("tests::Suv", "tests::Pickup");
        report.push(
            "TopSpeed",
            PropertyStatus::Assigned {
                source: "TopSpeed",
                conversion: Conversion::Direct,
            },
        );
        report.push("LoadCapacity", PropertyStatus::Skipped(SkipReason::NoMatch));
        report.push(
            "Kind",
            PropertyStatus::Failed(ConversionError::UnknownProperty { index: 4 }),
        );
        report
    }

    #[test]
    fn accessors_partition_outcomes() {
        let report = sample();

        assert_eq!(report.assigned().collect::<Vec<_>>(), ["TopSpeed"]);
        assert_eq!(report.failed().map(|(p, _)| p).collect::<Vec<_>>(), ["Kind"]);
        assert!(!report.is_clean());
        assert_eq!(
            report.outcome("LoadCapacity"),
            Some(&PropertyStatus::Skipped(SkipReason::NoMatch))
        );
    }

    #[test]
    fn report_serializes_with_status_tags() {
        let json = serde_json::to_value(sample()).expect("serialize report");

        assert_eq!(json["dest_path"], "tests::Pickup");
        assert_eq!(json["outcomes"][0]["status"]["Assigned"]["conversion"], "Direct");
        assert_eq!(json["outcomes"][1]["status"]["Skipped"], "NoMatch");
    }
}
