/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kind::Kind;

pub type Result<T> = std::result::Result<T, MeasureError>;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum MeasureError {
    #[error("invalid unit of measurement [{1}] for {0}")]
    InvalidUnit(Kind, String),
    #[error("no unit of measurement was specified")]
    UnspecifiedKind,
    #[error("unknown unit of measurement: {0}")]
    UnknownKind(String),
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for MeasureError {
    fn from(e: serde_json::Error) -> Self {
        MeasureError::Json(e.to_string())
    }
}

impl From<std::io::Error> for MeasureError {
    fn from(e: std::io::Error) -> Self {
        MeasureError::Io(e.to_string())
    }
}
