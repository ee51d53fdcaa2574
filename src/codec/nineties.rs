//! 1990-2006 date codes: factory location code followed by the month and
//! two-digit year digits interleaved, e.g. `SD0934` for March 1994
//! (month `03`, year `94`).

use crate::codec::{interleave, validate_month, validate_year, InterleavedCode};
use crate::domain::{FactoryCode, FactoryLocation, YearMonth};
use crate::errors::DateCodeError;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

pub const YEARS: RangeInclusive<i32> = 1990..=2006;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NinetiesCode {
    pub factory: FactoryLocation,
    pub period: YearMonth,
}

pub fn encode(factory_location_code: &str, year: i32, month: u32) -> Result<String, DateCodeError> {
    let factory = FactoryCode::parse(factory_location_code)?;
    validate_year(year, &YEARS)?;
    validate_month(month)?;

    Ok(interleave(&factory, month, year))
}

pub fn encode_date(factory_location_code: &str, date: NaiveDate) -> Result<String, DateCodeError> {
    encode(factory_location_code, date.year(), date.month())
}

pub fn decode(date_code: &str) -> Result<NinetiesCode, DateCodeError> {
    let stamp = InterleavedCode::split(date_code)?;
    let factory = FactoryLocation::resolve(stamp.factory_code)?;
    let year = resolve_century(&stamp)?;

    let month = stamp.period_value()?;
    validate_month(month)?;

    Ok(NinetiesCode {
        factory,
        period: YearMonth::new(year, month),
    })
}

/// A leading `0` places the year in 2000-2006, a leading `9` in the 1990s.
/// Any other leading digit cannot occur in this era.
fn resolve_century(stamp: &InterleavedCode<'_>) -> Result<i32, DateCodeError> {
    let short_year = stamp.year_value()? as i32;

    let year = match stamp.year_digits.as_bytes()[0] {
        b'0' => 2000 + short_year,
        _ => 1900 + short_year,
    };
    validate_year(year, &YEARS)?;

    Ok(year)
}
