/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;

use measure::{
    Distance, DistanceUnit, FileSize, FileSizeUnit, MeasureOptions,
    NumberFormat, Weight, WeightUnit,
};

#[test]
fn format() {
    let mut size = FileSize::default();
    assert_eq!(size.format(None, None, None), "0");

    size.set_value(1234.567);
    assert_eq!(size.format(None, None, None), "1.235");
    assert_eq!(size.format(Some(3), None, None), "1.234,567");
    assert_eq!(size.format(Some(2), Some("."), Some(",")), "1,234.57");
    assert_eq!(size.format(Some(0), None, Some("")), "1235");
}

#[test]
fn zero_decimals_is_an_override() {
    let mut d = Distance::make(1234.567, DistanceUnit::Meter);
    d.set_format(2, ",", " ");
    assert_eq!(d.format(None, None, None), "1 234,57");
    assert_eq!(d.format(Some(0), None, None), "1 235");
    assert_eq!(d.format(None, Some(""), Some("")), "123457");
}

#[test]
fn format_with_symbol() {
    let mut size = FileSize::default();
    assert_eq!(size.format_with_symbol(None, None, None), "0 B");

    size.set_value(1234.567);
    assert_eq!(size.format_with_symbol(None, None, None), "1.235 B");
    assert_eq!(size.format_with_symbol(Some(3), None, None), "1.234,567 B");

    let kb = size.to(FileSizeUnit::Kilobyte).into_owned();
    assert_eq!(kb.format_with_symbol(None, None, None), "1 kB");
    assert_eq!(kb.format_with_symbol(Some(3), None, None), "1,206 kB");

    let b = kb.to(FileSizeUnit::Byte).into_owned();
    assert_eq!(b.format_with_symbol(None, None, None), "1.235 B");
}

#[test]
fn format_distance_through_units() {
    let mut d = Distance::default();
    d.set_value(1234.567);
    assert_eq!(d.format_with_symbol(None, None, None), "1.235 m");

    let km = d.to(DistanceUnit::Kilometer).into_owned();
    assert_eq!(km.format_with_symbol(None, None, None), "1 km");
    assert_eq!(km.format_with_symbol(Some(3), None, None), "1,235 km");

    let mm = km.to(DistanceUnit::Millimeter);
    assert_eq!(mm.format_with_symbol(None, None, None), "1.234.567 mm");
}

#[test]
fn display() {
    let mut size = FileSize::default();
    assert_eq!(size.to_string(), "0 B");

    size.set_value(1234.567);
    assert_eq!(size.to_string(), "1.235 B");

    size.set_value(-1234.567);
    assert_eq!(size.to_string(), "-1.235 B");
}

#[test]
fn options() {
    let mut symbols = BTreeMap::new();
    symbols.insert(WeightUnit::Kilogram, "KG".to_string());
    let mut names = BTreeMap::new();
    names.insert(WeightUnit::Gram, "Gramme".to_string());

    let w = Weight::with_options(
        12345.0,
        WeightUnit::Kilogram,
        MeasureOptions {
            symbols,
            names,
            format: NumberFormat::new(1, ",", " "),
        },
    );
    assert_eq!(w.to_string(), "12 345,0 KG");

    /* Partial maps are laid over the defaults. */
    assert_eq!(w.symbols().len(), 4);
    assert_eq!(w.get_symbol(WeightUnit::Ton), "t");
    assert_eq!(w.get_name(WeightUnit::Gram), "Gramme");
    assert_eq!(w.get_name(WeightUnit::Ton), "ton");
    assert_eq!(w.name(), "kilogram");
}

#[test]
fn reset_symbols() {
    let mut d = Distance::default();
    d.set_symbol(DistanceUnit::Meter, "metres");
    assert_eq!(d.to_string(), "0 metres");
    d.set_symbols(BTreeMap::new());
    assert_eq!(d.to_string(), "0 m");
}
