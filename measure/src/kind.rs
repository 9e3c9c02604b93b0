/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MeasureError;

/// Measurement kinds. These can be considered a unit's "type".
/// Conversion is possible only between units of the same kind.
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
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Distance,
    Weight,
    LiquidVolume,
    FileSize,
}

impl Kind {
    pub const LIST: &'static [Self] =
        &[Self::Distance, Self::Weight, Self::LiquidVolume, Self::FileSize];

    /// The key under which the kind is configured.
    pub fn config_key(&self) -> &'static str {
        match self {
            Kind::Distance => "distance",
            Kind::Weight => "weight",
            Kind::LiquidVolume => "liquid-volume",
            Kind::FileSize => "file-size",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Kind::Distance => write!(f, "Distance"),
            Kind::Weight => write!(f, "Weight"),
            Kind::LiquidVolume => write!(f, "LiquidVolume"),
            Kind::FileSize => write!(f, "FileSize"),
        }
    }
}

impl FromStr for Kind {
    type Err = MeasureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::LIST
            .iter()
            .find(|kind| kind.config_key() == s)
            .copied()
            .ok_or_else(|| MeasureError::UnknownKind(s.to_string()))
    }
}
