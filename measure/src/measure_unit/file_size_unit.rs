/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MeasureUnit;
use crate::error::MeasureError;
use crate::kind::Kind;

/* The symbols are the decimal ones (kB, MB, ...) but the steps are
 * binary: 1 kB = 1024 B. */
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
pub enum FileSizeUnit {
    #[serde(rename = "YB")]
    Yottabyte,
    #[serde(rename = "ZB")]
    Zettabyte,
    #[serde(rename = "EB")]
    Exabyte,
    #[serde(rename = "PB")]
    Petabyte,
    #[serde(rename = "TB")]
    Terabyte,
    #[serde(rename = "GB")]
    Gigabyte,
    #[serde(rename = "MB")]
    Megabyte,
    #[serde(rename = "kB")]
    Kilobyte,
    #[serde(rename = "B")]
    Byte,
}

impl MeasureUnit for FileSizeUnit {
    const KIND: Kind = Kind::FileSize;
    const LIST: &'static [Self] = &[
        FileSizeUnit::Yottabyte,
        FileSizeUnit::Zettabyte,
        FileSizeUnit::Exabyte,
        FileSizeUnit::Petabyte,
        FileSizeUnit::Terabyte,
        FileSizeUnit::Gigabyte,
        FileSizeUnit::Megabyte,
        FileSizeUnit::Kilobyte,
        FileSizeUnit::Byte,
    ];
    const DEFAULT: Self = FileSizeUnit::Byte;
    const RATE: u64 = 1024;

    fn key(&self) -> &'static str {
        match self {
            FileSizeUnit::Yottabyte => "YB",
            FileSizeUnit::Zettabyte => "ZB",
            FileSizeUnit::Exabyte => "EB",
            FileSizeUnit::Petabyte => "PB",
            FileSizeUnit::Terabyte => "TB",
            FileSizeUnit::Gigabyte => "GB",
            FileSizeUnit::Megabyte => "MB",
            FileSizeUnit::Kilobyte => "kB",
            FileSizeUnit::Byte => "B",
        }
    }

    fn exponent(&self) -> i32 {
        match self {
            FileSizeUnit::Yottabyte => 0,
            FileSizeUnit::Zettabyte => 1,
            FileSizeUnit::Exabyte => 2,
            FileSizeUnit::Petabyte => 3,
            FileSizeUnit::Terabyte => 4,
            FileSizeUnit::Gigabyte => 5,
            FileSizeUnit::Megabyte => 6,
            FileSizeUnit::Kilobyte => 7,
            FileSizeUnit::Byte => 8,
        }
    }

    fn default_name(&self) -> &'static str {
        match self {
            FileSizeUnit::Yottabyte => "yottabyte",
            FileSizeUnit::Zettabyte => "zettabyte",
            FileSizeUnit::Exabyte => "exabyte",
            FileSizeUnit::Petabyte => "petabyte",
            FileSizeUnit::Terabyte => "terabyte",
            FileSizeUnit::Gigabyte => "gigabyte",
            FileSizeUnit::Megabyte => "megabyte",
            FileSizeUnit::Kilobyte => "kilobyte",
            FileSizeUnit::Byte => "byte",
        }
    }
}

impl Display for FileSizeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FileSizeUnit {
    type Err = MeasureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as MeasureUnit>::parse(s)
    }
}
