/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::calculate::Operator;
use crate::error::{MeasureError, Result};
use crate::kind::Kind;

/// A unit of one measurement kind.
///
/// `LIST` holds the units from the largest to the smallest. Every
/// unit has an exponent (0 for the largest, growing by one per step
/// down) and its ratio to the largest unit is `RATE ^ exponent`, so
/// converting between any two units only needs the two ratios.
pub trait MeasureUnit:
    Ord
    + Hash
    + Copy
    + Debug
    + Display
    + FromStr<Err = MeasureError>
    + Sized
    + 'static
{
    const KIND: Kind;
    const LIST: &'static [Self];
    const DEFAULT: Self;
    const RATE: u64;

    fn key(&self) -> &'static str;
    fn exponent(&self) -> i32;
    fn default_name(&self) -> &'static str;

    fn ratio(&self) -> f64 {
        Operator::Power.apply(Self::RATE as f64, self.exponent() as f64)
    }

    fn ratios() -> BTreeMap<Self, f64> {
        Self::LIST.iter().map(|u| (*u, u.ratio())).collect()
    }

    /// Factor to apply to a value in `self` to express it in `to`.
    fn ratio_to(&self, to: &Self) -> f64 {
        match self == to {
            true => 1.0,
            false => to.ratio() / self.ratio(),
        }
    }

    fn parse(input: &str) -> Result<Self> {
        Self::LIST
            .iter()
            .find(|u| u.key() == input)
            .copied()
            .ok_or_else(|| {
                MeasureError::InvalidUnit(Self::KIND, input.to_string())
            })
    }

    fn default_symbols() -> BTreeMap<Self, String> {
        Self::LIST.iter().map(|u| (*u, u.key().to_string())).collect()
    }

    fn default_names() -> BTreeMap<Self, String> {
        Self::LIST
            .iter()
            .map(|u| (*u, u.default_name().to_string()))
            .collect()
    }
}
