/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MeasureUnit;
use crate::error::MeasureError;
use crate::kind::Kind;

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
pub enum LiquidVolumeUnit {
    #[serde(rename = "kl")]
    Kilolitre,
    #[serde(rename = "hl")]
    Hectolitre,
    #[serde(rename = "dal")]
    Decalitre,
    #[serde(rename = "l")]
    Litre,
    #[serde(rename = "dl")]
    Decilitre,
    #[serde(rename = "cl")]
    Centilitre,
    #[serde(rename = "ml")]
    Millilitre,
}

impl MeasureUnit for LiquidVolumeUnit {
    const KIND: Kind = Kind::LiquidVolume;
    const LIST: &'static [Self] = &[
        LiquidVolumeUnit::Kilolitre,
        LiquidVolumeUnit::Hectolitre,
        LiquidVolumeUnit::Decalitre,
        LiquidVolumeUnit::Litre,
        LiquidVolumeUnit::Decilitre,
        LiquidVolumeUnit::Centilitre,
        LiquidVolumeUnit::Millilitre,
    ];
    const DEFAULT: Self = LiquidVolumeUnit::Litre;
    const RATE: u64 = 10;

    fn key(&self) -> &'static str {
        match self {
            LiquidVolumeUnit::Kilolitre => "kl",
            LiquidVolumeUnit::Hectolitre => "hl",
            LiquidVolumeUnit::Decalitre => "dal",
            LiquidVolumeUnit::Litre => "l",
            LiquidVolumeUnit::Decilitre => "dl",
            LiquidVolumeUnit::Centilitre => "cl",
            LiquidVolumeUnit::Millilitre => "ml",
        }
    }

    fn exponent(&self) -> i32 {
        match self {
            LiquidVolumeUnit::Kilolitre => 0,
            LiquidVolumeUnit::Hectolitre => 1,
            LiquidVolumeUnit::Decalitre => 2,
            LiquidVolumeUnit::Litre => 3,
            LiquidVolumeUnit::Decilitre => 4,
            LiquidVolumeUnit::Centilitre => 5,
            LiquidVolumeUnit::Millilitre => 6,
        }
    }

    fn default_name(&self) -> &'static str {
        match self {
            LiquidVolumeUnit::Kilolitre => "kilolitre",
            LiquidVolumeUnit::Hectolitre => "hectolitre",
            LiquidVolumeUnit::Decalitre => "decalitre",
            LiquidVolumeUnit::Litre => "litre",
            LiquidVolumeUnit::Decilitre => "decilitre",
            LiquidVolumeUnit::Centilitre => "centilitre",
            LiquidVolumeUnit::Millilitre => "millilitre",
        }
    }
}

impl Display for LiquidVolumeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.key())
    }
}

impl FromStr for LiquidVolumeUnit {
    type Err = MeasureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as MeasureUnit>::parse(s)
    }
}
