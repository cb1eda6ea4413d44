use crate::prelude::*;
use shapemap::obs::{MapEvent, MapSink, metrics_report, metrics_reset_all, with_map_sink};
use std::cell::Cell;

fn mauve_form() -> CarForm {
    CarForm {
        trim: "Mauve".into(),
        ..CarForm::default()
    }
}

#[derive(Default)]
struct FailureCounter {
    failures: Cell<u32>,
}

impl MapSink for FailureCounter {
    fn record(&self, event: &MapEvent<'_>) {
        if let MapEvent::PropertyFailed { .. } = event {
            self.failures.set(self.failures.get() + 1);
        }
    }
}

#[test]
fn report_serializes_for_diagnostics() {
    let (_, report) = Mapper::default()
        .create_and_map_with_report::<CarEntity, _>(&mauve_form(), &ExclusionSet::none())
        .expect("map");

    let json = serde_json::to_value(&report).expect("serialize");

    assert_eq!(json["dest_path"], CarEntity::MODEL.path);
    assert_eq!(json["outcomes"][0]["property"], "Id");
    assert_eq!(json["outcomes"][0]["status"]["Skipped"], "NoMatch");

    let trim = report
        .outcomes
        .iter()
        .position(|o| o.property == "Trim")
        .expect("trim outcome");
    assert_eq!(
        json["outcomes"][trim]["status"]["Failed"]["EnumParse"]["text"],
        "Mauve"
    );
}

#[test]
fn failures_reach_a_scoped_sink() {
    let sink = FailureCounter::default();

    let entity: CarEntity = with_map_sink(&sink, || {
        shapemap::create_and_map(&mauve_form(), &ExclusionSet::none()).expect("map")
    });

    // TopSpeed and Year are text on the form; Trim is not a member.
    assert_eq!(entity.trim, Trim::Base);
    assert_eq!(entity.model.as_deref(), Some(""));
    assert_eq!(sink.failures.get(), 3);
}

#[test]
fn global_counters_are_per_type() {
    metrics_reset_all();

    let _: Car = shapemap::create_and_map(&Suv::default(), &ExclusionSet::none()).expect("map");
    let _: Car = shapemap::create_and_map(&Pickup::default(), &ExclusionSet::none()).expect("map");

    let report = metrics_report();
    assert_eq!(report.ops.generic_passes, 2);
    assert_eq!(report.types[Car::MODEL.path].passes, 2);
    assert_eq!(report.types[Car::MODEL.path].properties_assigned, 4);
}
