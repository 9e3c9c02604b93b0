/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use log::warn;
use serde::{Deserialize, Serialize};

/// Binary operations on measurement values.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*", alias = "x")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    pub const LIST: &'static [Self] = &[
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "x" | "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Division by zero follows IEEE-754: the result is an
    /// infinity or NaN, never a panic.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Power => {
                match b.fract() == 0.0 && b.abs() <= i32::MAX as f64 {
                    true => a.powi(b as i32),
                    false => a.powf(b),
                }
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluate `a <operator> b`. An unrecognized operator leaves `a`
/// unchanged.
pub fn calculate(a: f64, operator: &str, b: f64) -> f64 {
    match Operator::from_symbol(operator) {
        Some(op) => op.apply(a, b),
        None => {
            warn!("unknown operator '{}', keeping {}", operator, a);
            a
        }
    }
}
