/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::MeasureError;
use crate::measure_unit::MeasureUnit;
use crate::parser::parse_amount;

/// A bare value and unit, without symbol or name tables.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub struct Amount<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: MeasureUnit> Amount<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Amount { value, unit }
    }

    pub fn from_unit(unit: U) -> Self {
        Amount::new(1.0, unit)
    }

    pub fn parse(input: &str) -> Result<Self, MeasureError> {
        parse_amount(input)
    }

    pub fn convert(self, unit: U) -> Self {
        Amount::new(self.value * self.unit.ratio_to(&unit), unit)
    }

    /* Note: we cannot implement the trait without giving up on
    comparing amounts in different units. */
    pub fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&rhs.convert(self.unit).value)
    }
}

impl<U: MeasureUnit> Display for Amount<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl<U: MeasureUnit> FromStr for Amount<U> {
    type Err = MeasureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

#[cfg(feature = "serialize_as_string")]
mod as_string {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_with::{DeserializeAs, DisplayFromStr, SerializeAs};

    use super::Amount;
    use crate::measure_unit::MeasureUnit;

    impl<U: MeasureUnit> Serialize for Amount<U> {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            DisplayFromStr::serialize_as(self, serializer)
        }
    }

    impl<'de, U: MeasureUnit> Deserialize<'de> for Amount<U> {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            DisplayFromStr::deserialize_as(deserializer)
        }
    }
}
