/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

/// How a measurement value is rendered as text.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct NumberFormat {
    pub decimals: usize,
    pub decimal_separator: String,
    pub thousands_separator: String,
}

impl NumberFormat {
    pub fn new(
        decimals: usize,
        decimal_separator: &str,
        thousands_separator: &str,
    ) -> Self {
        Self {
            decimals,
            decimal_separator: decimal_separator.to_string(),
            thousands_separator: thousands_separator.to_string(),
        }
    }

    pub fn format(&self, value: f64) -> String {
        format_number(
            value,
            self.decimals,
            &self.decimal_separator,
            &self.thousands_separator,
        )
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(0, ",", ".")
    }
}

/// Round `value` to `decimals` fractional digits (half away from
/// zero), group the integer digits by three and join the parts with
/// the given separators.
pub fn format_number(
    value: f64,
    decimals: usize,
    decimal_separator: &str,
    thousands_separator: &str,
) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let factor = 10f64.powi(decimals.min(i32::MAX as usize) as i32);
    let scaled = pre_round(value.abs() * factor);
    let rounded = match scaled.is_finite() {
        true => scaled.round() / factor,
        false => value.abs(),
    };

    let digits = format!("{:.*}", decimals, rounded);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let negative = value < 0.0
        && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::with_capacity(digits.len() + int_part.len());
    if negative {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push_str(thousands_separator);
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push_str(decimal_separator);
        out.push_str(frac);
    }
    out
}

/// Round to 15 significant digits, so that a scaled decimal half
/// stored just below its exact value (`1.005 * 100` is
/// `100.49999999999999`) still rounds away from zero.
fn pre_round(scaled: f64) -> f64 {
    if !scaled.is_finite() || scaled >= 1e15 {
        return scaled;
    }
    format!("{:.14e}", scaled).parse().unwrap_or(scaled)
}
