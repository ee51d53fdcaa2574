//! Date code encoders and decoders, one module per era.
//!
//! Each era has its own fixed grammar; nothing here guesses which era a code
//! belongs to. [`Era`] only dispatches to the module the caller picked.

pub mod early_1980;
pub mod late_1980;
pub mod nineties;
pub mod post_2007;

use crate::clock::Clock;
use crate::domain::{FactoryCode, FactoryLocation, ManufacturingPeriod};
use crate::errors::DateCodeError;
use chrono::NaiveDate;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(into = "&'static str")]
pub enum Era {
    /// 1980-1989, no factory code: `YYM` or `YYMM`.
    Early1980s,
    /// 1980-1989 with factory code: `YYMCC` or `YYMMCC`.
    Late1980s,
    /// 1990-2006: `CC` then month and year digits interleaved.
    Nineties,
    /// 2007 up to the current year: `CC` then ISO week and year digits interleaved.
    Post2007,
}

/// A decoded date code, whichever era it came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DecodedDateCode {
    pub era: Era,
    pub period: ManufacturingPeriod,
    pub factory: Option<FactoryLocation>,
}

impl Era {
    pub const ALL: [Era; 4] = [
        Era::Early1980s,
        Era::Late1980s,
        Era::Nineties,
        Era::Post2007,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Early1980s => "early-1980",
            Self::Late1980s => "late-1980",
            Self::Nineties => "1990",
            Self::Post2007 => "2007",
        }
    }

    pub fn years(&self, clock: &impl Clock) -> RangeInclusive<i32> {
        match self {
            Self::Early1980s => early_1980::YEARS,
            Self::Late1980s => late_1980::YEARS,
            Self::Nineties => nineties::YEARS,
            Self::Post2007 => post_2007::years(clock),
        }
    }

    /// Lengths a well-formed code of this era can have.
    pub fn code_lengths(&self) -> RangeInclusive<usize> {
        match self {
            Self::Early1980s => 3..=4,
            Self::Late1980s => 5..=6,
            Self::Nineties | Self::Post2007 => 6..=6,
        }
    }

    pub fn uses_factory_code(&self) -> bool {
        !matches!(self, Self::Early1980s)
    }

    /// Encodes a year together with a month (before 2007) or an ISO week
    /// (from 2007 on).
    #[tracing::instrument(name = "Encoding date code", skip(clock))]
    pub fn encode(
        &self,
        factory_location_code: Option<&str>,
        year: i32,
        month_or_week: u32,
        clock: &impl Clock,
    ) -> Result<String, DateCodeError> {
        let factory = self.factory_argument(factory_location_code)?;

        let result = match self {
            Self::Early1980s => early_1980::encode(year, month_or_week),
            Self::Late1980s => late_1980::encode(factory, year, month_or_week),
            Self::Nineties => nineties::encode(factory, year, month_or_week),
            Self::Post2007 => post_2007::encode(factory, year, month_or_week, clock),
        };

        result.inspect_err(|e| tracing::debug!(error = %e, "Refused to encode date code"))
    }

    #[tracing::instrument(name = "Encoding date code from a calendar date", skip(clock))]
    pub fn encode_date(
        &self,
        factory_location_code: Option<&str>,
        date: NaiveDate,
        clock: &impl Clock,
    ) -> Result<String, DateCodeError> {
        let factory = self.factory_argument(factory_location_code)?;

        let result = match self {
            Self::Early1980s => early_1980::encode_date(date),
            Self::Late1980s => late_1980::encode_date(factory, date),
            Self::Nineties => nineties::encode_date(factory, date),
            Self::Post2007 => post_2007::encode_date(factory, date, clock),
        };

        result.inspect_err(|e| tracing::debug!(error = %e, "Refused to encode date code"))
    }

    #[tracing::instrument(name = "Decoding date code", skip(clock))]
    pub fn decode(
        &self,
        date_code: &str,
        clock: &impl Clock,
    ) -> Result<DecodedDateCode, DateCodeError> {
        let era = *self;

        let result = match self {
            Self::Early1980s => early_1980::decode(date_code).map(|period| DecodedDateCode {
                era,
                period: period.into(),
                factory: None,
            }),
            Self::Late1980s => late_1980::decode(date_code).map(|code| DecodedDateCode {
                era,
                period: code.period.into(),
                factory: Some(code.factory),
            }),
            Self::Nineties => nineties::decode(date_code).map(|code| DecodedDateCode {
                era,
                period: code.period.into(),
                factory: Some(code.factory),
            }),
            Self::Post2007 => post_2007::decode(date_code, clock).map(|code| DecodedDateCode {
                era,
                period: code.period.into(),
                factory: Some(code.factory),
            }),
        };

        result.inspect_err(|e| tracing::debug!(error = %e, "Rejected date code"))
    }

    /// Checks that a factory code is given exactly when the era stamps one.
    /// Returns "" for the early-1980s era.
    fn factory_argument<'a>(
        &self,
        factory_location_code: Option<&'a str>,
    ) -> Result<&'a str, DateCodeError> {
        let given = factory_location_code.filter(|code| !code.trim().is_empty());

        match (self.uses_factory_code(), given) {
            (true, Some(code)) => Ok(code),
            (true, None) => Err(DateCodeError::EmptyInput("factory_location_code")),
            (false, None) => Ok(""),
            (false, Some(code)) => Err(DateCodeError::invalid_format(
                "factory location code",
                code,
                "Early-1980s date codes carry no factory location code.",
            )),
        }
    }
}

impl Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Era> for &'static str {
    fn from(era: Era) -> Self {
        era.as_str()
    }
}

impl FromStr for Era {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "early-1980" | "early1980" => Ok(Self::Early1980s),
            "late-1980" | "late1980" => Ok(Self::Late1980s),
            "1990" => Ok(Self::Nineties),
            "2007" => Ok(Self::Post2007),
            other => Err(format!(
                "'{}' is not a supported era. \
                Use 'early-1980', 'late-1980', '1990' or '2007'.",
                other
            )),
        }
    }
}

/// Refuses blank or non-ASCII input. Surrounding whitespace is not
/// stripped, so a padded code fails the length or digit checks.
pub(crate) fn ascii_code(date_code: &str) -> Result<&str, DateCodeError> {
    if date_code.trim().is_empty() {
        return Err(DateCodeError::EmptyInput("date_code"));
    }

    if !date_code.is_ascii() {
        return Err(DateCodeError::invalid_format(
            "date code",
            date_code,
            "Only ASCII letters and digits can appear in a date code.",
        ));
    }

    Ok(date_code)
}

pub(crate) fn parse_digits(digits: &str) -> Result<u32, DateCodeError> {
    let not_digits = || {
        DateCodeError::invalid_format("date code digits", digits, "Expected decimal digits.")
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_digits());
    }

    digits.parse::<u32>().map_err(|_| not_digits())
}

pub(crate) fn validate_year(year: i32, years: &RangeInclusive<i32>) -> Result<(), DateCodeError> {
    if !years.contains(&year) {
        return Err(DateCodeError::out_of_range(
            "year",
            year,
            *years.start(),
            *years.end(),
        ));
    }

    Ok(())
}

pub(crate) fn validate_month(month: u32) -> Result<(), DateCodeError> {
    if !(1..=12).contains(&month) {
        return Err(DateCodeError::out_of_range("month", month, 1u32, 12u32));
    }

    Ok(())
}

/// `CC` + period tens + year tens + period units + year units.
pub(crate) fn interleave(factory: &FactoryCode, period: u32, year: i32) -> String {
    let period = format!("{:02}", period);
    let year = format!("{:02}", year % 100);
    let (period, year) = (period.as_bytes(), year.as_bytes());

    format!(
        "{}{}{}{}{}",
        factory,
        period[0] as char,
        year[0] as char,
        period[1] as char,
        year[1] as char
    )
}

/// A six-character interleaved code split back into its parts.
#[derive(Debug)]
pub(crate) struct InterleavedCode<'a> {
    pub factory_code: &'a str,
    pub period_digits: String,
    pub year_digits: String,
}

impl<'a> InterleavedCode<'a> {
    const LENGTH: usize = 6;

    pub fn split(date_code: &'a str) -> Result<Self, DateCodeError> {
        let code = ascii_code(date_code)?;

        if code.len() != Self::LENGTH {
            return Err(DateCodeError::invalid_format(
                "date code",
                code,
                "Interleaved codes are exactly 6 characters long.",
            ));
        }

        let bytes = code.as_bytes();
        let pair = |tens: usize, units: usize| {
            [bytes[tens] as char, bytes[units] as char]
                .iter()
                .collect::<String>()
        };

        Ok(Self {
            factory_code: &code[0..2],
            period_digits: pair(2, 4),
            year_digits: pair(3, 5),
        })
    }

    pub fn period_value(&self) -> Result<u32, DateCodeError> {
        parse_digits(&self.period_digits)
    }

    pub fn year_value(&self) -> Result<u32, DateCodeError> {
        parse_digits(&self.year_digits)
    }
}
