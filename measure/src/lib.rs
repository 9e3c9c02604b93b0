/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod amount;
pub mod calculate;
pub mod config;
pub mod error;
pub mod format;
pub mod kind;
pub mod measure_unit;
pub mod measurement;
pub mod parser;
pub mod registry;

pub use amount::Amount;
pub use calculate::{calculate, Operator};
pub use config::{MeasureConfig, UnitsConfig};
pub use error::{MeasureError, Result};
pub use format::{format_number, NumberFormat};
pub use kind::Kind;
pub use measure_unit::{
    DistanceUnit, FileSizeUnit, LiquidVolumeUnit, MeasureUnit, WeightUnit,
};
pub use measurement::{
    Distance, FileSize, LiquidVolume, MeasureOptions, Measurement, Weight,
};
pub use registry::{AnyMeasurement, Registry};
