//! Early-1980s date codes: two-digit year followed by the month without
//! zero padding, e.g. `857` for July 1985 and `8511` for November 1985.

use crate::codec::{ascii_code, parse_digits, validate_month, validate_year};
use crate::domain::YearMonth;
use crate::errors::DateCodeError;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

pub const YEARS: RangeInclusive<i32> = 1980..=1989;

pub fn encode(year: i32, month: u32) -> Result<String, DateCodeError> {
    validate_year(year, &YEARS)?;
    validate_month(month)?;

    Ok(format!("{:02}{}", year % 100, month))
}

pub fn encode_date(date: NaiveDate) -> Result<String, DateCodeError> {
    encode(date.year(), date.month())
}

pub fn decode(date_code: &str) -> Result<YearMonth, DateCodeError> {
    let code = ascii_code(date_code)?;

    if !(3..=4).contains(&code.len()) {
        return Err(DateCodeError::invalid_format(
            "date code",
            code,
            "Early-1980s codes are 3 or 4 characters long.",
        ));
    }

    decode_year_and_month(code)
}

/// Reads the `YY` + month prefix shared with the late-1980s grammar.
///
/// `digits` must be 3 or 4 ASCII characters long.
pub(super) fn decode_year_and_month(digits: &str) -> Result<YearMonth, DateCodeError> {
    let short_year = parse_digits(&digits[0..2])?;
    let year = 1900 + short_year as i32;
    validate_year(year, &YEARS)?;

    let month_digits = &digits[2..];
    if month_digits == "0" {
        return Err(DateCodeError::invalid_format(
            "date code",
            digits,
            "A single-digit month cannot be '0'.",
        ));
    }

    let month = parse_digits(month_digits)?;
    validate_month(month)?;

    Ok(YearMonth::new(year, month))
}
