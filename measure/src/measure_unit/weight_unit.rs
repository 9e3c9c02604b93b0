/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MeasureUnit;
use crate::error::MeasureError;
use crate::kind::Kind;

/// Mass units, in steps of a thousand (t, kg, g, mg).
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum WeightUnit {
    #[serde(rename = "t")]
    Ton,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "mg")]
    Milligram,
}

impl MeasureUnit for WeightUnit {
    const KIND: Kind = Kind::Weight;
    const LIST: &'static [Self] = &[
        WeightUnit::Ton,
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Milligram,
    ];
    const DEFAULT: Self = WeightUnit::Kilogram;
    const RATE: u64 = 1000;

    fn key(&self) -> &'static str {
        match self {
            WeightUnit::Ton => "t",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
            WeightUnit::Milligram => "mg",
        }
    }

    fn exponent(&self) -> i32 {
        match self {
            WeightUnit::Ton => 0,
            WeightUnit::Kilogram => 1,
            WeightUnit::Gram => 2,
            WeightUnit::Milligram => 3,
        }
    }

    fn default_name(&self) -> &'static str {
        match self {
            WeightUnit::Ton => "ton",
            WeightUnit::Kilogram => "kilogram",
            WeightUnit::Gram => "gram",
            WeightUnit::Milligram => "milligram",
        }
    }
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.key())
    }
}

impl FromStr for WeightUnit {
    type Err = MeasureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as MeasureUnit>::parse(s)
    }
}
