//! Date codes from 2007 on: same interleaving as the 1990-2006 codes, with
//! the ISO 8601 week replacing the month, e.g. `AA3142` for week 34 of 2012.

use crate::clock::Clock;
use crate::codec::{interleave, validate_year, InterleavedCode};
use crate::domain::{iso_weeks_in_year, FactoryCode, FactoryLocation, YearWeek};
use crate::errors::DateCodeError;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

pub const FIRST_YEAR: i32 = 2007;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PostTwoThousandSevenCode {
    pub factory: FactoryLocation,
    pub period: YearWeek,
}

/// Years accepted on the day reported by `clock`.
pub fn years(clock: &impl Clock) -> RangeInclusive<i32> {
    FIRST_YEAR..=clock.current_year()
}

pub fn encode(
    factory_location_code: &str,
    year: i32,
    week: u32,
    clock: &impl Clock,
) -> Result<String, DateCodeError> {
    let factory = FactoryCode::parse(factory_location_code)?;
    validate_year(year, &years(clock))?;
    validate_week(year, week)?;

    Ok(interleave(&factory, week, year))
}

/// Encodes the ISO week containing `date`.
///
/// Near New Year the ISO year can differ from the calendar year; the ISO year
/// is the one bounded and stamped.
pub fn encode_date(
    factory_location_code: &str,
    date: NaiveDate,
    clock: &impl Clock,
) -> Result<String, DateCodeError> {
    // The calendar year is bounded as well so a date past the current year
    // is refused even when its ISO week still belongs to the current one.
    validate_year(date.year(), &years(clock))?;

    let iso_week = date.iso_week();
    encode(factory_location_code, iso_week.year(), iso_week.week(), clock)
}

pub fn decode(
    date_code: &str,
    clock: &impl Clock,
) -> Result<PostTwoThousandSevenCode, DateCodeError> {
    let stamp = InterleavedCode::split(date_code)?;
    let factory = FactoryLocation::resolve(stamp.factory_code)?;

    let year = 2000 + stamp.year_value()? as i32;
    validate_year(year, &years(clock))?;

    let week = stamp.period_value()?;
    validate_week(year, week)?;

    Ok(PostTwoThousandSevenCode {
        factory,
        period: YearWeek::new(year, week),
    })
}

fn validate_week(year: i32, week: u32) -> Result<(), DateCodeError> {
    let weeks = iso_weeks_in_year(year);

    if !(1..=weeks).contains(&week) {
        return Err(DateCodeError::out_of_range("week", week, 1u32, weeks));
    }

    Ok(())
}
