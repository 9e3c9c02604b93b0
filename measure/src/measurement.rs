/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::calculate::calculate;
use crate::error::Result;
use crate::format::{format_number, NumberFormat};
use crate::measure_unit::{
    DistanceUnit, FileSizeUnit, LiquidVolumeUnit, MeasureUnit, WeightUnit,
};
use crate::parser::parse_amount;

pub type Distance = Measurement<DistanceUnit>;
pub type Weight = Measurement<WeightUnit>;
pub type LiquidVolume = Measurement<LiquidVolumeUnit>;
pub type FileSize = Measurement<FileSizeUnit>;

/// Optional settings for a new measurement. Symbols and names given
/// here are laid over the defaults of the kind.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct MeasureOptions<U: MeasureUnit> {
    #[serde(default)]
    pub symbols: BTreeMap<U, String>,
    #[serde(default)]
    pub names: BTreeMap<U, String>,
    #[serde(default)]
    pub format: NumberFormat,
}

impl<U: MeasureUnit> Default for MeasureOptions<U> {
    fn default() -> Self {
        Self {
            symbols: BTreeMap::new(),
            names: BTreeMap::new(),
            format: NumberFormat::default(),
        }
    }
}

/// A value in one of the units of a measurement kind.
///
/// Conversion (`to`) never touches the receiver. The arithmetic
/// operations update the value in place and return the same
/// measurement, so they can be chained. There is no internal locking:
/// a measurement shared between tasks must be synchronized by the
/// caller.
#[derive(PartialEq, Clone, Debug)]
pub struct Measurement<U: MeasureUnit> {
    value: f64,
    unit: U,
    symbols: BTreeMap<U, String>,
    names: BTreeMap<U, String>,
    format: NumberFormat,
}

impl<U: MeasureUnit> Measurement<U> {
    pub fn make(value: f64, unit: U) -> Self {
        Self::with_options(value, unit, MeasureOptions::default())
    }

    pub fn with_options(
        value: f64,
        unit: U,
        options: MeasureOptions<U>,
    ) -> Self {
        let mut measurement = Self {
            value,
            unit,
            symbols: U::default_symbols(),
            names: U::default_names(),
            format: options.format,
        };
        measurement.set_symbols(options.symbols);
        measurement.set_names(options.names);
        measurement
    }

    pub fn parse(input: &str) -> Result<Self> {
        let amount = parse_amount::<U>(input)?;
        Ok(Self::make(amount.value, amount.unit))
    }

    pub fn from_amount(amount: Amount<U>) -> Self {
        Self::make(amount.value, amount.unit)
    }

    pub fn amount(&self) -> Amount<U> {
        Amount::new(self.value, self.unit)
    }

    /* Getters & setters. */

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.value = value;
        self
    }

    pub fn units() -> &'static [U] {
        U::LIST
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn set_unit(&mut self, unit: U) -> &mut Self {
        self.unit = unit;
        self
    }

    pub fn set_unit_str(&mut self, unit: &str) -> Result<&mut Self> {
        Ok(self.set_unit(U::parse(unit)?))
    }

    pub fn symbols(&self) -> &BTreeMap<U, String> {
        &self.symbols
    }

    pub fn symbol(&self) -> &str {
        self.get_symbol(self.unit)
    }

    pub fn get_symbol(&self, unit: U) -> &str {
        self.symbols.get(&unit).map_or(unit.key(), String::as_str)
    }

    pub fn set_symbol(&mut self, unit: U, symbol: &str) -> &mut Self {
        self.symbols.insert(unit, symbol.to_string());
        self
    }

    /// An empty map resets all symbols to the defaults.
    pub fn set_symbols(
        &mut self,
        symbols: BTreeMap<U, String>,
    ) -> &mut Self {
        match symbols.is_empty() {
            true => self.symbols = U::default_symbols(),
            false => self.symbols.extend(symbols),
        }
        self
    }

    pub fn names(&self) -> &BTreeMap<U, String> {
        &self.names
    }

    pub fn name(&self) -> &str {
        self.get_name(self.unit)
    }

    pub fn get_name(&self, unit: U) -> &str {
        self.names
            .get(&unit)
            .map_or(unit.default_name(), String::as_str)
    }

    pub fn set_name(&mut self, unit: U, name: &str) -> &mut Self {
        self.names.insert(unit, name.to_string());
        self
    }

    /// An empty map resets all names to the defaults.
    pub fn set_names(&mut self, names: BTreeMap<U, String>) -> &mut Self {
        match names.is_empty() {
            true => self.names = U::default_names(),
            false => self.names.extend(names),
        }
        self
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.format
    }

    pub fn set_format(
        &mut self,
        decimals: usize,
        decimal_separator: &str,
        thousands_separator: &str,
    ) -> &mut Self {
        self.format =
            NumberFormat::new(decimals, decimal_separator, thousands_separator);
        self
    }

    pub fn options(&self) -> MeasureOptions<U> {
        MeasureOptions {
            symbols: self.symbols.clone(),
            names: self.names.clone(),
            format: self.format.clone(),
        }
    }

    /* Conversion. */

    pub fn convert(from: U, to: U, value: f64) -> f64 {
        value * from.ratio_to(&to)
    }

    pub fn convert_str(from: &str, to: &str, value: f64) -> Result<f64> {
        Ok(Self::convert(U::parse(from)?, U::parse(to)?, value))
    }

    /// Express the measurement in another unit. Converting to the
    /// current unit borrows `self`; otherwise a new measurement is
    /// returned carrying the same symbols, names and format. The
    /// result borrows `self`, so a temporary needs `into_owned()` or
    /// [`Measurement::into_unit`].
    pub fn to(&self, unit: U) -> Cow<'_, Self> {
        if unit == self.unit {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Self {
            value: Self::convert(self.unit, unit, self.value),
            unit,
            symbols: self.symbols.clone(),
            names: self.names.clone(),
            format: self.format.clone(),
        })
    }

    pub fn to_str(&self, unit: &str) -> Result<Cow<'_, Self>> {
        Ok(self.to(U::parse(unit)?))
    }

    /// Convert the measurement itself to another unit.
    pub fn into_unit(mut self, unit: U) -> Self {
        self.value = Self::convert(self.unit, unit, self.value);
        self.unit = unit;
        self
    }

    /* Calculation. */

    pub fn add(&mut self, other: &Self) -> &mut Self {
        let other = other.to(self.unit);
        self.value = calculate(self.value, "+", other.value);
        self
    }

    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        let other = other.to(self.unit);
        self.value = calculate(self.value, "-", other.value);
        self
    }

    pub fn add_amount(&mut self, value: f64, unit: U) -> &mut Self {
        self.add(&Self::make(value, unit))
    }

    pub fn subtract_amount(&mut self, value: f64, unit: U) -> &mut Self {
        self.subtract(&Self::make(value, unit))
    }

    pub fn multiply(&mut self, n: f64) -> &mut Self {
        self.value = calculate(self.value, "*", n);
        self
    }

    /// Division by zero yields an infinite or NaN value.
    pub fn divide(&mut self, n: f64) -> &mut Self {
        self.value = calculate(self.value, "/", n);
        self
    }

    /* Formatting. */

    /// Render the value; `None` falls back to the stored format.
    pub fn format(
        &self,
        decimals: Option<usize>,
        decimal_separator: Option<&str>,
        thousands_separator: Option<&str>,
    ) -> String {
        format_number(
            self.value,
            decimals.unwrap_or(self.format.decimals),
            decimal_separator.unwrap_or(self.format.decimal_separator.as_str()),
            thousands_separator
                .unwrap_or(self.format.thousands_separator.as_str()),
        )
    }

    pub fn format_with_symbol(
        &self,
        decimals: Option<usize>,
        decimal_separator: Option<&str>,
        thousands_separator: Option<&str>,
    ) -> String {
        format!(
            "{} {}",
            self.format(decimals, decimal_separator, thousands_separator),
            self.symbol()
        )
    }
}

impl<U: MeasureUnit> Default for Measurement<U> {
    fn default() -> Self {
        Self::make(0.0, U::DEFAULT)
    }
}

impl<U: MeasureUnit> Display for Measurement<U> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(None, None, None))
    }
}

impl<U: MeasureUnit> From<Amount<U>> for Measurement<U> {
    fn from(amount: Amount<U>) -> Self {
        Self::from_amount(amount)
    }
}

impl<U: MeasureUnit> AddAssign<&Measurement<U>> for Measurement<U> {
    fn add_assign(&mut self, rhs: &Measurement<U>) {
        self.add(rhs);
    }
}

impl<U: MeasureUnit> SubAssign<&Measurement<U>> for Measurement<U> {
    fn sub_assign(&mut self, rhs: &Measurement<U>) {
        self.subtract(rhs);
    }
}

impl<U: MeasureUnit> MulAssign<f64> for Measurement<U> {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply(rhs);
    }
}

impl<U: MeasureUnit> DivAssign<f64> for Measurement<U> {
    fn div_assign(&mut self, rhs: f64) {
        self.divide(rhs);
    }
}
