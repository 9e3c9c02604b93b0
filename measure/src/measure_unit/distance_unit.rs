/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MeasureUnit;
use crate::error::MeasureError;
use crate::kind::Kind;

/// Metric length units, in decimal steps.
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
pub enum DistanceUnit {
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "hm")]
    Hectometer,
    #[serde(rename = "dam")]
    Decameter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "dm")]
    Decimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "mm")]
    Millimeter,
}

impl MeasureUnit for DistanceUnit {
    const KIND: Kind = Kind::Distance;
    const LIST: &'static [Self] = &[
        DistanceUnit::Kilometer,
        DistanceUnit::Hectometer,
        DistanceUnit::Decameter,
        DistanceUnit::Meter,
        DistanceUnit::Decimeter,
        DistanceUnit::Centimeter,
        DistanceUnit::Millimeter,
    ];
    const DEFAULT: Self = DistanceUnit::Meter;
    const RATE: u64 = 10;

    fn key(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Hectometer => "hm",
            DistanceUnit::Decameter => "dam",
            DistanceUnit::Meter => "m",
            DistanceUnit::Decimeter => "dm",
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Millimeter => "mm",
        }
    }

    fn exponent(&self) -> i32 {
        match self {
            DistanceUnit::Kilometer => 0,
            DistanceUnit::Hectometer => 1,
            DistanceUnit::Decameter => 2,
            DistanceUnit::Meter => 3,
            DistanceUnit::Decimeter => 4,
            DistanceUnit::Centimeter => 5,
            DistanceUnit::Millimeter => 6,
        }
    }

    fn default_name(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometer => "kilometre",
            DistanceUnit::Hectometer => "hectometre",
            DistanceUnit::Decameter => "decametre",
            DistanceUnit::Meter => "metre",
            DistanceUnit::Decimeter => "decimetre",
            DistanceUnit::Centimeter => "centimetre",
            DistanceUnit::Millimeter => "millimetre",
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DistanceUnit {
    type Err = MeasureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as MeasureUnit>::parse(s)
    }
}
