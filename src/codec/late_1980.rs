//! Late-1980s date codes: the early-1980s `YY` + month prefix followed by
//! the factory location code, e.g. `8711FR`.

use crate::codec::early_1980::{self, decode_year_and_month};
use crate::codec::{ascii_code, validate_month, validate_year};
use crate::domain::{FactoryCode, FactoryLocation, YearMonth};
use crate::errors::DateCodeError;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

pub const YEARS: RangeInclusive<i32> = early_1980::YEARS;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LateEightiesCode {
    pub factory: FactoryLocation,
    pub period: YearMonth,
}

pub fn encode(factory_location_code: &str, year: i32, month: u32) -> Result<String, DateCodeError> {
    let factory = FactoryCode::parse(factory_location_code)?;
    validate_year(year, &YEARS)?;
    validate_month(month)?;

    Ok(format!("{:02}{}{}", year % 100, month, factory))
}

pub fn encode_date(factory_location_code: &str, date: NaiveDate) -> Result<String, DateCodeError> {
    encode(factory_location_code, date.year(), date.month())
}

pub fn decode(date_code: &str) -> Result<LateEightiesCode, DateCodeError> {
    let code = ascii_code(date_code)?;

    if !(5..=6).contains(&code.len()) {
        return Err(DateCodeError::invalid_format(
            "date code",
            code,
            "Late-1980s codes are 5 or 6 characters long.",
        ));
    }

    let (digits, factory_code) = code.split_at(code.len() - 2);
    let factory = FactoryLocation::resolve(factory_code)?;
    let period = decode_year_and_month(digits)?;

    Ok(LateEightiesCode { factory, period })
}
