/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use measure::{
    Distance, DistanceUnit, FileSize, FileSizeUnit, LiquidVolume,
    LiquidVolumeUnit, Weight, WeightUnit,
};

const VALUES: [f64; 6] = [1.0, 10.0, 100.0, 1000.0, 0.1, 0.01];

#[test]
fn add_amount() {
    let mut size = FileSize::default();
    let mut total = 0.0;
    for value in VALUES {
        size.add_amount(value, FileSizeUnit::Byte);
        total += value;
        assert_eq!(size.value(), total);
    }

    let mut size = FileSize::default();
    size.add_amount(-1.0, FileSizeUnit::Byte);
    assert_eq!(size.value(), -1.0);
}

#[test]
fn add_measurement() {
    let mut weight = Weight::default();
    let mut total = 0.0;
    for value in VALUES {
        let w = Weight::make(value, WeightUnit::Kilogram);
        weight.add(&w);
        total += w.value();
        assert_eq!(weight.value(), total);
    }
}

#[test]
fn add_measurement_in_other_unit() {
    let mut size = FileSize::default();
    let kb = FileSize::make(1.0, FileSizeUnit::Kilobyte);
    size.add(&kb);
    assert_eq!(size.value(), 1024.0);
    assert_eq!(size.unit(), FileSizeUnit::Byte);

    /* The operand is left alone. */
    assert_eq!(kb.value(), 1.0);
    assert_eq!(kb.unit(), FileSizeUnit::Kilobyte);

    let mut d = Distance::make(1.0, DistanceUnit::Kilometer);
    d.add_amount(500.0, DistanceUnit::Meter);
    assert_eq!(d.value(), 1.5);
    assert_eq!(d.unit(), DistanceUnit::Kilometer);
}

#[test]
fn subtract() {
    let mut volume = LiquidVolume::default();
    volume.subtract_amount(1.0, LiquidVolumeUnit::Litre);
    assert_eq!(volume.value(), -1.0);
    volume.subtract_amount(99.0, LiquidVolumeUnit::Litre);
    assert_eq!(volume.value(), -100.0);

    let mut volume = LiquidVolume::default();
    volume.subtract_amount(-1.0, LiquidVolumeUnit::Litre);
    assert_eq!(volume.value(), 1.0);
    volume.subtract_amount(-99.0, LiquidVolumeUnit::Litre);
    assert_eq!(volume.value(), 100.0);

    let mut volume = LiquidVolume::make(1.0, LiquidVolumeUnit::Litre);
    let cl = LiquidVolume::make(25.0, LiquidVolumeUnit::Centilitre);
    volume.subtract(&cl);
    assert_eq!(volume.value(), 0.75);
    assert_eq!(cl.value(), 25.0);
}

#[test]
fn multiply() {
    let mut d = Distance::default();
    d.set_value(1.0);
    let mut total = 1.0;
    for value in 1..=10 {
        d.multiply(value as f64);
        total *= value as f64;
        assert_eq!(d.value(), total);
    }

    let mut d = Distance::default();
    d.set_value(1.0);
    let mut total = 1.0;
    for value in -10..=-1 {
        d.multiply(value as f64);
        total *= value as f64;
        assert_eq!(d.value(), total);
    }
}

#[test]
fn divide() {
    let mut w = Weight::default();
    w.set_value(1.0);
    let mut total = 1.0;
    for value in 1..=10 {
        w.divide(value as f64);
        total /= value as f64;
        assert_eq!(w.value(), total);
    }
}

#[test]
fn divide_by_zero() {
    let mut size = FileSize::make(1.0, FileSizeUnit::Byte);
    size.divide(0.0);
    assert_eq!(size.value(), f64::INFINITY);

    let mut size = FileSize::default();
    size.divide(0.0);
    assert!(size.value().is_nan());
}

#[test]
fn chaining() {
    let mut d = Distance::default();
    d.add_amount(1.0, DistanceUnit::Kilometer)
        .multiply(2.0)
        .subtract_amount(500.0, DistanceUnit::Meter)
        .divide(3.0);
    assert_eq!(d.value(), 500.0);
    assert_eq!(d.to_string(), "500 m");
}

#[test]
fn operators() {
    let mut d = Distance::make(2.0, DistanceUnit::Meter);
    d += &Distance::make(50.0, DistanceUnit::Centimeter);
    assert_eq!(d.value(), 2.5);
    d *= 4.0;
    assert_eq!(d.value(), 10.0);
    d -= &Distance::make(1.0, DistanceUnit::Decameter);
    assert_eq!(d.value(), 0.0);
    d += &Distance::make(3.0, DistanceUnit::Meter);
    d /= 2.0;
    assert_eq!(d.value(), 1.5);
}
