/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::NumberFormat;
use crate::kind::Kind;
use crate::measure_unit::MeasureUnit;
use crate::measurement::MeasureOptions;

const BUILTIN_CONFIG: &str = include_str!("../config/units.json");

/// Configuration of all measurement kinds, keyed as in
/// `config/units.json`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct UnitsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<MeasureConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<MeasureConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_volume: Option<MeasureConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<MeasureConfig>,
}

/// Configuration of one measurement kind. Unit keys are kept as
/// strings until the kind is known.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MeasureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    #[serde(default)]
    pub format: NumberFormat,
}

impl UnitsConfig {
    /// The configuration shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CONFIG)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading unit configuration from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn get(&self, kind: Kind) -> Option<&MeasureConfig> {
        match kind {
            Kind::Distance => self.distance.as_ref(),
            Kind::Weight => self.weight.as_ref(),
            Kind::LiquidVolume => self.liquid_volume.as_ref(),
            Kind::FileSize => self.file_size.as_ref(),
        }
    }

    pub fn set(&mut self, kind: Kind, config: MeasureConfig) {
        let slot = match kind {
            Kind::Distance => &mut self.distance,
            Kind::Weight => &mut self.weight,
            Kind::LiquidVolume => &mut self.liquid_volume,
            Kind::FileSize => &mut self.file_size,
        };
        *slot = Some(config);
    }
}

impl MeasureConfig {
    pub fn default_unit<U: MeasureUnit>(&self) -> Result<U> {
        match &self.default {
            Some(unit) => U::parse(unit),
            None => Ok(U::DEFAULT),
        }
    }

    /// Validate the unit keys against the kind `U`.
    pub fn options<U: MeasureUnit>(&self) -> Result<MeasureOptions<U>> {
        Ok(MeasureOptions {
            symbols: validate_keys(&self.symbols)?,
            names: validate_keys(&self.names)?,
            format: self.format.clone(),
        })
    }
}

fn validate_keys<U: MeasureUnit>(
    map: &BTreeMap<String, String>,
) -> Result<BTreeMap<U, String>> {
    map.iter()
        .map(|(unit, label)| Ok((U::parse(unit)?, label.clone())))
        .collect()
}
