use crate::prelude::*;
use shapemap::{MapperConfig, config::DEFAULT_IMPLICIT_EXCLUDES, types::EntityRef};

fn stored_car() -> CarEntity {
    CarEntity {
        id: 3,
        entity_key: Some("car-3".into()),
        dealer: EntityRef::new(12),
        ..CarEntity::default()
    }
}

#[test]
fn defaults_match_entity_conventions() {
    let config = MapperConfig::default();

    assert_eq!(config.implicit_excludes, DEFAULT_IMPLICIT_EXCLUDES);
    assert!(config.enum_numeric_fallback);
    assert_eq!(MapperConfig::from_toml_str("").expect("empty"), config);
}

#[test]
fn navigation_list_can_be_cleared() {
    let mapper = Mapper::from_toml_str("navigation_supertypes = []").expect("config");

    let copy: CarEntity = mapper
        .create_and_map_entity(&stored_car(), &ExclusionSet::none())
        .expect("map");

    assert_eq!(copy.dealer.key(), Some(12));
    assert_eq!(copy.id, 0);
}

#[test]
fn implicit_excludes_can_be_replaced() {
    let mapper = Mapper::from_toml_str(
        r#"
        implicit_excludes = ["EntityKey", "Year"]
        "#,
    )
    .expect("config");

    let copy: CarEntity = mapper
        .create_and_map_entity(
            &CarEntity {
                year: 1999,
                ..stored_car()
            },
            &ExclusionSet::none(),
        )
        .expect("map");

    assert_eq!(copy.id, 3);
    assert_eq!(copy.entity_key, None);
    assert_eq!(copy.year, 0);
}

#[test]
fn numeric_enum_fallback_can_be_disabled() {
    let mapper = Mapper::from_toml_str("enum_numeric_fallback = false").expect("config");
    let dto = CarDto {
        trim: "10".into(),
        ..CarDto::default()
    };

    let (entity, report) = mapper
        .create_and_map_with_report::<CarEntity, _>(&dto, &ExclusionSet::none())
        .expect("map");

    assert_eq!(entity.trim, Trim::Base);
    assert!(!report.is_clean());
}

#[test]
fn bad_documents_are_invalid_arguments() {
    let unknown = Mapper::from_toml_str("strict = true").expect_err("unknown key");
    assert!(unknown.is_invalid_argument());

    let empty = Mapper::from_toml_str(r#"implicit_excludes = [""]"#).expect_err("empty name");
    assert!(empty.is_invalid_argument());
    assert!(empty.to_string().contains("implicit_excludes"));
}
