/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod measure_unit_trait;

pub mod distance_unit;
pub mod file_size_unit;
pub mod liquid_volume_unit;
pub mod weight_unit;

pub use distance_unit::DistanceUnit;
pub use file_size_unit::FileSizeUnit;
pub use liquid_volume_unit::LiquidVolumeUnit;
pub use measure_unit_trait::MeasureUnit;
pub use weight_unit::WeightUnit;
