/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::config::UnitsConfig;
use crate::error::{MeasureError, Result};
use crate::kind::Kind;
use crate::measure_unit::MeasureUnit;
use crate::measurement::{
    Distance, FileSize, LiquidVolume, Measurement, Weight,
};
use crate::parser::parse_amount;

/// Builds zero-valued measurements from configuration.
#[derive(Clone, Default, Debug)]
pub struct Registry {
    config: UnitsConfig,
}

/// A measurement of any kind, as returned by the registry.
#[derive(PartialEq, Clone, Debug)]
pub enum AnyMeasurement {
    Distance(Distance),
    Weight(Weight),
    LiquidVolume(LiquidVolume),
    FileSize(FileSize),
}

impl Registry {
    pub fn new(config: UnitsConfig) -> Self {
        Self { config }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(UnitsConfig::builtin()?))
    }

    pub fn config(&self) -> &UnitsConfig {
        &self.config
    }

    /// Build a measurement of the kind with the given config key
    /// (`distance`, `weight`, `liquid-volume` or `file-size`).
    pub fn make(&self, kind: Option<&str>) -> Result<AnyMeasurement> {
        let kind = match kind {
            None | Some("") => return Err(MeasureError::UnspecifiedKind),
            Some(kind) => kind.parse::<Kind>()?,
        };
        match kind {
            Kind::Distance => Ok(AnyMeasurement::Distance(self.distance()?)),
            Kind::Weight => Ok(AnyMeasurement::Weight(self.weight()?)),
            Kind::LiquidVolume => {
                Ok(AnyMeasurement::LiquidVolume(self.liquid_volume()?))
            }
            Kind::FileSize => Ok(AnyMeasurement::FileSize(self.file_size()?)),
        }
    }

    pub fn distance(&self) -> Result<Distance> {
        self.build()
    }

    pub fn weight(&self) -> Result<Weight> {
        self.build()
    }

    pub fn liquid_volume(&self) -> Result<LiquidVolume> {
        self.build()
    }

    pub fn file_size(&self) -> Result<FileSize> {
        self.build()
    }

    /// Build a zero-valued measurement of kind `U`. A kind without
    /// configuration gets the built-in defaults of its unit type.
    pub fn build<U: MeasureUnit>(&self) -> Result<Measurement<U>> {
        match self.config.get(U::KIND) {
            Some(config) => {
                let unit = config.default_unit::<U>()?;
                debug!("building {} measurement in {}", U::KIND, unit);
                Ok(Measurement::with_options(0.0, unit, config.options()?))
            }
            None => {
                debug!("no configuration for {}, using defaults", U::KIND);
                Ok(Measurement::default())
            }
        }
    }
}

impl AnyMeasurement {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Distance(_) => Kind::Distance,
            Self::Weight(_) => Kind::Weight,
            Self::LiquidVolume(_) => Kind::LiquidVolume,
            Self::FileSize(_) => Kind::FileSize,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Distance(m) => m.value(),
            Self::Weight(m) => m.value(),
            Self::LiquidVolume(m) => m.value(),
            Self::FileSize(m) => m.value(),
        }
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        match self {
            Self::Distance(m) => {
                m.set_value(value);
            }
            Self::Weight(m) => {
                m.set_value(value);
            }
            Self::LiquidVolume(m) => {
                m.set_value(value);
            }
            Self::FileSize(m) => {
                m.set_value(value);
            }
        }
        self
    }

    /// Key of the current unit.
    pub fn unit_key(&self) -> &'static str {
        match self {
            Self::Distance(m) => m.unit().key(),
            Self::Weight(m) => m.unit().key(),
            Self::LiquidVolume(m) => m.unit().key(),
            Self::FileSize(m) => m.unit().key(),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Distance(m) => m.symbol(),
            Self::Weight(m) => m.symbol(),
            Self::LiquidVolume(m) => m.symbol(),
            Self::FileSize(m) => m.symbol(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Distance(m) => m.name(),
            Self::Weight(m) => m.name(),
            Self::LiquidVolume(m) => m.name(),
            Self::FileSize(m) => m.name(),
        }
    }

    /// Parse an amount such as "1.5 km" into a measurement of the same
    /// kind, keeping this measurement's symbols, names and format.
    pub fn with_amount(&self, input: &str) -> Result<Self> {
        Ok(match self {
            Self::Distance(m) => Self::Distance(reparse(m, input)?),
            Self::Weight(m) => Self::Weight(reparse(m, input)?),
            Self::LiquidVolume(m) => Self::LiquidVolume(reparse(m, input)?),
            Self::FileSize(m) => Self::FileSize(reparse(m, input)?),
        })
    }

    /// Convert to the unit with the given key.
    pub fn convert_str(&self, unit: &str) -> Result<Self> {
        Ok(match self {
            Self::Distance(m) => Self::Distance(m.to_str(unit)?.into_owned()),
            Self::Weight(m) => Self::Weight(m.to_str(unit)?.into_owned()),
            Self::LiquidVolume(m) => {
                Self::LiquidVolume(m.to_str(unit)?.into_owned())
            }
            Self::FileSize(m) => Self::FileSize(m.to_str(unit)?.into_owned()),
        })
    }

    /// The bare value and unit as JSON.
    pub fn amount_json(&self) -> Result<serde_json::Value> {
        Ok(match self {
            Self::Distance(m) => serde_json::to_value(m.amount())?,
            Self::Weight(m) => serde_json::to_value(m.amount())?,
            Self::LiquidVolume(m) => serde_json::to_value(m.amount())?,
            Self::FileSize(m) => serde_json::to_value(m.amount())?,
        })
    }

    pub fn format_with_symbol(
        &self,
        decimals: Option<usize>,
        decimal_separator: Option<&str>,
        thousands_separator: Option<&str>,
    ) -> String {
        let (d, ds, ts) = (decimals, decimal_separator, thousands_separator);
        match self {
            Self::Distance(m) => m.format_with_symbol(d, ds, ts),
            Self::Weight(m) => m.format_with_symbol(d, ds, ts),
            Self::LiquidVolume(m) => m.format_with_symbol(d, ds, ts),
            Self::FileSize(m) => m.format_with_symbol(d, ds, ts),
        }
    }
}

fn reparse<U: MeasureUnit>(
    template: &Measurement<U>,
    input: &str,
) -> Result<Measurement<U>> {
    let amount = parse_amount::<U>(input)?;
    Ok(Measurement::with_options(
        amount.value,
        amount.unit,
        template.options(),
    ))
}

impl Display for AnyMeasurement {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Distance(m) => m.fmt(f),
            Self::Weight(m) => m.fmt(f),
            Self::LiquidVolume(m) => m.fmt(f),
            Self::FileSize(m) => m.fmt(f),
        }
    }
}
