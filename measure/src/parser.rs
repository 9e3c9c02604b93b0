/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    branch::alt,
    character::complete::{alpha1, char, digit0, digit1, one_of, space0},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

use crate::amount::Amount;
use crate::error::{MeasureError, Result};
use crate::measure_unit::MeasureUnit;

/// Parse a string such as "1.5 km" or "-3kB" to an amount. A missing
/// unit means the default unit of the kind.
pub fn parse_amount<U: MeasureUnit>(input: &str) -> Result<Amount<U>> {
    match amount::<U>(input.trim()) {
        Ok(("", q)) => q,
        Ok((r, _)) => {
            Err(MeasureError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(MeasureError::ParseError(format!("{}", err))),
    }
}

/// Parse a unit key, such as "km".
pub fn parse_unit<U: MeasureUnit>(input: &str) -> Result<U> {
    match unit_key(input.trim()) {
        Ok(("", key)) => U::parse(key),
        Ok((r, _)) => {
            Err(MeasureError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(MeasureError::ParseError(format!("{}", err))),
    }
}

/// Parser for amounts (number and optional unit).
pub fn amount<U: MeasureUnit>(
    input: &str,
) -> IResult<&str, Result<Amount<U>>> {
    let (input, (value, _, key)) =
        tuple((number, space0, opt(unit_key)))(input)?;
    Ok((
        input,
        match key {
            Some(key) => U::parse(key).map(|unit| Amount::new(value, unit)),
            None => Ok(Amount::new(value, U::DEFAULT)),
        },
    ))
}

/// Parser for unit keys. Validation against the unit list of a
/// kind is left to the caller.
pub fn unit_key(input: &str) -> IResult<&str, &str> {
    alpha1(input)
}

/* Unlike nom's `double`, the exponent is optional without cutting,
 * so that "1EB" parses as one exabyte. */
fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        str::parse::<f64>,
    )(input)
}
