/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use measure::{
    AnyMeasurement, DistanceUnit, FileSizeUnit, Kind, MeasureError,
    Registry, UnitsConfig, WeightUnit,
};

fn registry() -> Registry {
    Registry::builtin().unwrap()
}

#[test]
fn unspecified_kind() {
    assert_eq!(registry().make(None), Err(MeasureError::UnspecifiedKind));
    assert_eq!(registry().make(Some("")), Err(MeasureError::UnspecifiedKind));
    assert_eq!(
        registry().make(Some("speed")),
        Err(MeasureError::UnknownKind("speed".to_string()))
    );
}

#[test]
fn make_each_kind() {
    let registry = registry();
    for kind in Kind::LIST {
        let m = registry.make(Some(kind.config_key())).unwrap();
        assert_eq!(m.kind(), *kind);
        assert_eq!(m.value(), 0.0);
    }
}

#[test]
fn distance_from_builtin_config() {
    let mut d = registry().distance().unwrap();
    assert_eq!(d.unit(), DistanceUnit::Meter);
    assert_eq!(d.symbol(), "m");
    assert_eq!(d.name(), "Meter");
    assert_eq!(d.format(None, None, None), "0");

    d.set_value(1234.567);
    assert_eq!(d.format(None, None, None), "1 235");
    assert_eq!(d.format(Some(3), None, None), "1 234,567");
    assert_eq!(d.to_string(), "1 235 m");
}

#[test]
fn file_size_from_builtin_config() {
    let size = registry().make(Some("file-size")).unwrap();
    assert_eq!(size.kind(), Kind::FileSize);
    assert_eq!(size.unit_key(), "B");
    assert_eq!(size.symbol(), "b");
    assert_eq!(size.name(), "byte");

    let kb = size.with_amount("1 kB").unwrap();
    assert_eq!(kb.to_string(), "1 kb");
    let b = kb.convert_str("B").unwrap();
    assert_eq!(b.value(), 1024.0);
    assert_eq!(b.to_string(), "1 024 b");
    assert_eq!(b.format_with_symbol(Some(1), Some("."), None), "1 024.0 b");

    assert!(matches!(
        kb.convert_str("KB"),
        Err(MeasureError::InvalidUnit(Kind::FileSize, _))
    ));
}

#[test]
fn weight_and_volume_from_builtin_config() {
    let registry = registry();
    let w = registry.weight().unwrap();
    assert_eq!(w.unit(), WeightUnit::Kilogram);
    assert_eq!(w.name(), "Kilogram");

    let v = registry.make(Some("liquid-volume")).unwrap();
    assert_eq!(v.unit_key(), "l");
    assert_eq!(v.name(), "Litre");
}

#[test]
fn empty_config_uses_defaults() {
    let registry = Registry::default();
    let size = registry.file_size().unwrap();
    assert_eq!(size.unit(), FileSizeUnit::Byte);
    assert_eq!(size.symbol(), "B");
    assert_eq!(size.name(), "byte");
    assert_eq!(size.number_format().decimal_separator, ",");
    assert_eq!(size.number_format().thousands_separator, ".");
}

#[test]
fn partial_config() {
    let config = UnitsConfig::from_json(
        r#"{ "weight": { "default": "g", "symbols": { "g": "gr" } } }"#,
    )
    .unwrap();
    assert!(config.distance.is_none());

    let registry = Registry::new(config);
    let w = registry.weight().unwrap();
    assert_eq!(w.unit(), WeightUnit::Gram);
    assert_eq!(w.symbol(), "gr");
    assert_eq!(w.get_symbol(WeightUnit::Kilogram), "kg");
    assert_eq!(w.name(), "gram");

    let d = registry.distance().unwrap();
    assert_eq!(d.unit(), DistanceUnit::Meter);
}

#[test]
fn invalid_config() {
    let config = UnitsConfig::from_json(
        r#"{ "weight": { "symbols": { "lb": "pound" } } }"#,
    )
    .unwrap();
    assert_eq!(
        Registry::new(config).weight(),
        Err(MeasureError::InvalidUnit(Kind::Weight, "lb".to_string()))
    );

    let config =
        UnitsConfig::from_json(r#"{ "distance": { "default": "mile" } }"#)
            .unwrap();
    assert_eq!(
        Registry::new(config).make(Some("distance")),
        Err(MeasureError::InvalidUnit(Kind::Distance, "mile".to_string()))
    );

    assert!(matches!(
        UnitsConfig::from_json("{ not json"),
        Err(MeasureError::Json(_))
    ));
}

#[test]
fn load_config_file() {
    let path = std::env::temp_dir()
        .join(format!("measure-units-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "liquid-volume": { "default": "ml", "format": { "decimals": 2 } } }"#,
    )
    .unwrap();

    let config = UnitsConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let v = Registry::new(config).liquid_volume().unwrap();
    assert_eq!(v.to_string(), "0,00 ml");

    assert!(matches!(
        UnitsConfig::load(&path),
        Err(MeasureError::Io(_))
    ));
}

#[test]
fn builtin_config_round_trip() {
    let config = UnitsConfig::builtin().unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(UnitsConfig::from_json(&json).unwrap(), config);
    for kind in Kind::LIST {
        assert!(config.get(*kind).is_some());
    }
}

#[cfg(not(feature = "serialize_as_string"))]
#[test]
fn amount_json() {
    let b = registry()
        .make(Some("file-size"))
        .unwrap()
        .with_amount("2kB")
        .unwrap()
        .convert_str("B")
        .unwrap();
    assert_eq!(
        b.amount_json().unwrap(),
        serde_json::json!({ "value": 2048.0, "unit": "B" })
    );
}

#[test]
fn any_measurement_set_value() {
    let mut m = registry().make(Some("distance")).unwrap();
    m.set_value(12.0);
    assert!(matches!(&m, AnyMeasurement::Distance(d) if d.value() == 12.0));
}
