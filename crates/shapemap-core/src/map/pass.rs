//! One full destination sweep: screen, match, coerce, assign.

use crate::{
    error::{ConversionError, ErrorOrigin, MapError},
    map::{
        coerce::{Coercion, coerce, widen},
        matcher::{MatchRules, match_property},
        report::{Conversion, MapReport, PropertyStatus, SkipReason},
    },
    model::validated_model,
    obs::sink::{MapEvent, PassKind, record},
    traits::Mappable,
    value::Value,
};

/// Populate `dest` from `source` under `rules`.
///
/// Each destination property receives at most one assignment. Conversion
/// failures are recorded and the sweep continues; only a broken model or a
/// setter that rejects its own index aborts.
pub(crate) fn sweep<S: Mappable, D: Mappable>(
    source: &S,
    dest: &mut D,
    rules: &MatchRules<'_>,
    kind: PassKind,
) -> Result<MapReport, MapError> {
    validated_model::<S>()?;
    let dest_model = validated_model::<D>()?;

    let mut pass = Pass::start(kind, S::MODEL.path, dest_model.path);

    for (index, property) in dest_model.properties.iter().enumerate() {
        if let Some(reason) = rules.screen(property) {
            pass.settle(property.name, PropertyStatus::Skipped(reason));
            continue;
        }

        let matched = match_property(property, source, rules);
        let status = match coerce(property, matched, rules.config) {
            Ok(Coercion::Skip(reason)) => PropertyStatus::Skipped(reason),
            Ok(Coercion::Assign {
                source,
                value,
                conversion,
            }) => assign(dest, index, value, source, conversion)?,
            Err(err) => PropertyStatus::Failed(err),
        };

        pass.settle(property.name, status);
    }

    Ok(pass.finish())
}

/// Copy same-named properties verbatim, nulls included.
///
/// Source lookup is exact-case; there are no exclusions and no coercion
/// beyond lossless integer widening.
pub(crate) fn bind<S: Mappable, D: Mappable>(
    source: &S,
    dest: &mut D,
) -> Result<MapReport, MapError> {
    validated_model::<S>()?;
    let dest_model = validated_model::<D>()?;

    let mut pass = Pass::start(PassKind::Bind, S::MODEL.path, dest_model.path);

    for (index, property) in dest_model.properties.iter().enumerate() {
        let status = match S::MODEL.property(property.name) {
            None => PropertyStatus::Skipped(SkipReason::NoMatch),
            Some((source_index, source_property)) => {
                let value = widen(property, source.get_value(source_index).unwrap_or(Value::Null));
                let conversion = if property.same_declared_type(source_property) {
                    Conversion::Direct
                } else {
                    Conversion::BestEffort
                };

                assign(dest, index, value, source_property.name, conversion)?
            }
        };

        pass.settle(property.name, status);
    }

    Ok(pass.finish())
}

pub(crate) fn assign<D: Mappable>(
    dest: &mut D,
    index: usize,
    value: Value,
    source: &'static str,
    conversion: Conversion,
) -> Result<PropertyStatus, MapError> {
    match dest.set_value(index, value) {
        Ok(()) => Ok(PropertyStatus::Assigned { source, conversion }),
        Err(err @ ConversionError::UnknownProperty { .. }) => Err(MapError::operation(
            ErrorOrigin::Map,
            format!("{} rejected its own property index: {err}", D::MODEL.path),
        )),
        Err(err) => Ok(PropertyStatus::Failed(err)),
    }
}

///
/// Pass
/// Report builder that mirrors every outcome to the sink.
///

pub(crate) struct Pass {
    kind: PassKind,
    report: MapReport,
    assigned: u64,
    failed: u64,
}

impl Pass {
    pub(crate) fn start(kind: PassKind, source_path: &'static str, dest_path: &'static str) -> Self {
        record(&MapEvent::PassStart {
            kind,
            source_path,
            dest_path,
        });

        Self {
            kind,
            report: MapReport::new(source_path, dest_path),
            assigned: 0,
            failed: 0,
        }
    }

    pub(crate) fn settle(&mut self, property: &'static str, status: PropertyStatus) {
        let dest_path = self.report.dest_path;

        match &status {
            PropertyStatus::Assigned { conversion, .. } => {
                self.assigned += 1;
                record(&MapEvent::PropertyAssigned {
                    dest_path,
                    property,
                    converted: *conversion != Conversion::Direct,
                });
            }
            PropertyStatus::Skipped(_) => {
                record(&MapEvent::PropertySkipped {
                    dest_path,
                    property,
                });
            }
            PropertyStatus::Failed(error) => {
                self.failed += 1;
                record(&MapEvent::PropertyFailed {
                    dest_path,
                    property,
                    error,
                });
            }
        }

        self.report.push(property, status);
    }

    pub(crate) fn finish(self) -> MapReport {
        record(&MapEvent::PassFinish {
            kind: self.kind,
            dest_path: self.report.dest_path,
            assigned: self.assigned,
            failed: self.failed,
        });

        self.report
    }
}
