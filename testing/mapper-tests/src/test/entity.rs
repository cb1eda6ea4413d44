use crate::prelude::*;
use proptest::prelude::*;
use shapemap::{
    create_and_map, create_and_map_entity,
    map::{PropertyStatus, SkipReason},
    map_into_entity,
    types::{Decimal, EntityRef},
};

fn compass() -> Suv {
    Suv {
        top_speed: 180,
        model: Some("Compass".into()),
        year: 2025,
        off_road_capability: 5,
    }
}

fn stored_car() -> CarEntity {
    CarEntity {
        id: 41,
        entity_key: Some("car-41".into()),
        top_speed: 210,
        model: Some("Roadster".into()),
        year: 2019,
        trim: Trim::Sport,
        price: Decimal::new(4_250_000, 2),
        dealer: EntityRef::new(9),
    }
}

///
/// SIBLING SUBTYPES
///

#[test]
fn suv_maps_onto_pickup() {
    let pickup: Pickup = create_and_map_entity(&compass(), &ExclusionSet::none()).expect("map");

    assert_eq!(pickup.top_speed, 180);
    assert_eq!(pickup.model.as_deref(), Some("Compass"));
    assert_eq!(pickup.year, 2025);
    assert_eq!(pickup.load_capacity, 0);
}

#[test]
fn subtype_maps_onto_base_shape() {
    let car: Car = create_and_map(&compass(), &ExclusionSet::none()).expect("map");

    assert_eq!(
        car,
        Car {
            top_speed: 180,
            model: Some("Compass".into()),
            year: 2025,
        }
    );
}

#[test]
fn base_shape_fills_existing_subtype() {
    let car = Car {
        top_speed: 150,
        model: None,
        year: 2020,
    };
    let existing = compass();

    let suv = map_into_entity(&car, existing, &ExclusionSet::none()).expect("map");

    assert_eq!(suv.top_speed, 150);
    assert_eq!(suv.model.as_deref(), Some("Compass"));
    assert_eq!(suv.year, 2020);
    assert_eq!(suv.off_road_capability, 5);
}

///
/// ENTITIES
///

#[test]
fn entity_to_dto_drops_identity_and_navigation() {
    let (dto, report) = Mapper::default()
        .create_and_map_entity_with_report::<CarDto, _>(&stored_car(), &ExclusionSet::none())
        .expect("map");

    assert_eq!(dto.id, 0);
    assert_eq!(dto.entity_key, None);
    assert_eq!(dto.dealer, None);
    assert_eq!(dto.top_speed, 210);
    assert_eq!(dto.price, Decimal::new(4_250_000, 2));

    assert_eq!(
        report.outcome("Id"),
        Some(&PropertyStatus::Skipped(SkipReason::Excluded))
    );
    // The source reference is screened out, so the plain key finds nothing.
    assert_eq!(
        report.outcome("Dealer"),
        Some(&PropertyStatus::Skipped(SkipReason::NoMatch))
    );
}

#[test]
fn enum_to_text_is_rejected_by_strict_setter() {
    let (dto, report) = Mapper::default()
        .create_and_map_entity_with_report::<CarDto, _>(&stored_car(), &ExclusionSet::none())
        .expect("map");

    assert_eq!(dto.trim, "");
    assert_eq!(report.failed().map(|(name, _)| name).collect::<Vec<_>>(), ["Trim"]);
}

#[test]
fn dto_text_parses_into_entity_enum() {
    let dto = CarDto {
        trim: "limited".into(),
        ..CarDto::default()
    };

    let entity = map_into_entity(&dto, stored_car(), &ExclusionSet::none()).expect("map");

    assert_eq!(entity.trim, Trim::Limited);
    assert_eq!(entity.id, 41);
    assert_eq!(entity.dealer.key(), Some(9));

    let dto = CarDto {
        trim: "gt".into(),
        ..CarDto::default()
    };
    let entity = map_into_entity(&dto, stored_car(), &ExclusionSet::none()).expect("map");
    assert_eq!(entity.trim, Trim::GrandTourer);
}

#[test]
fn numeric_text_picks_enum_by_discriminant() {
    let dto = CarDto {
        trim: "-1".into(),
        ..CarDto::default()
    };

    let entity: CarEntity = create_and_map(&dto, &ExclusionSet::none()).expect("map");

    assert_eq!(entity.trim, Trim::GrandTourer);
}

#[test]
fn navigation_supertype_can_be_declared_by_attribute() {
    let legacy = LegacyCar {
        speed: 99,
        model_name: Some("Beetle".into()),
        history: vec![1, 2, 3],
    };

    let copy: LegacyCar = create_and_map_entity(&legacy, &ExclusionSet::none()).expect("map");
    assert_eq!(copy.speed, 99);
    assert!(copy.history.is_empty());

    let copy: LegacyCar = create_and_map(&legacy, &ExclusionSet::none()).expect("map");
    assert_eq!(copy.history, [1, 2, 3]);
}

#[test]
fn renamed_properties_match_ignoring_case() {
    let legacy = LegacyCar {
        model_name: Some("Beetle".into()),
        ..LegacyCar::default()
    };

    let car: Car = create_and_map(&legacy, &ExclusionSet::none()).expect("map");

    // `TOP_SPEED` is not `TopSpeed`; only the model carries over.
    assert_eq!(car.model.as_deref(), Some("Beetle"));
    assert_eq!(car.top_speed, 0);
}

///
/// PROPERTIES
///

fn arb_suv() -> impl Strategy<Value = Suv> {
    (
        any::<i32>(),
        proptest::option::of("[A-Za-z0-9]{1,10}"),
        any::<i32>(),
        any::<i32>(),
    )
        .prop_map(|(top_speed, model, year, off_road_capability)| Suv {
            top_speed,
            model,
            year,
            off_road_capability,
        })
}

fn arb_exclusions() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(vec!["topspeed", "MODEL", "Year", "LoadCapacity"], 0..=4)
}

proptest! {
    #[test]
    fn excluded_properties_keep_prior_values(suv in arb_suv(), names in arb_exclusions()) {
        let prior = Pickup {
            top_speed: -1,
            model: Some("prior".into()),
            year: -1,
            load_capacity: -1,
        };
        let excludes = ExclusionSet::new(names.iter().copied());

        let pickup = map_into_entity(&suv, prior.clone(), &excludes).expect("map");

        if excludes.contains("TopSpeed") {
            prop_assert_eq!(pickup.top_speed, prior.top_speed);
        } else {
            prop_assert_eq!(pickup.top_speed, suv.top_speed);
        }
        if excludes.contains("Year") {
            prop_assert_eq!(pickup.year, prior.year);
        } else {
            prop_assert_eq!(pickup.year, suv.year);
        }
        if excludes.contains("Model") || suv.model.is_none() {
            prop_assert_eq!(pickup.model, prior.model);
        } else {
            prop_assert_eq!(pickup.model, suv.model);
        }
        prop_assert_eq!(pickup.load_capacity, prior.load_capacity);
    }

    #[test]
    fn entity_mode_never_writes_identity(id in any::<i64>(), key in "[a-z]{0,8}") {
        let source = CarEntity { id, entity_key: Some(key), ..stored_car() };

        let copy: CarEntity = create_and_map_entity(&source, &ExclusionSet::none()).expect("map");

        prop_assert_eq!(copy.id, 0);
        prop_assert_eq!(copy.entity_key, None);
    }
}
