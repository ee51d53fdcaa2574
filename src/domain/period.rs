use chrono::{NaiveDate, Weekday};
use std::fmt::Display;

/// Calendar year and month (1-12), used by every era before 2007.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

/// ISO 8601 week-numbering year and week, used from 2007 on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct YearWeek {
    pub year: i32,
    pub week: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManufacturingPeriod {
    Month(YearMonth),
    IsoWeek(YearWeek),
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl YearWeek {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }
}

impl ManufacturingPeriod {
    pub fn year(&self) -> i32 {
        match self {
            Self::Month(ym) => ym.year,
            Self::IsoWeek(yw) => yw.year,
        }
    }
}

impl From<YearMonth> for ManufacturingPeriod {
    fn from(value: YearMonth) -> Self {
        Self::Month(value)
    }
}

impl From<YearWeek> for ManufacturingPeriod {
    fn from(value: YearWeek) -> Self {
        Self::IsoWeek(value)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Display for YearWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl Display for ManufacturingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month(ym) => ym.fmt(f),
            Self::IsoWeek(yw) => yw.fmt(f),
        }
    }
}

/// Number of weeks (52 or 53) in the given ISO week-numbering year.
pub fn iso_weeks_in_year(year: i32) -> u32 {
    if NaiveDate::from_isoywd_opt(year, 53, Weekday::Mon).is_some() {
        53
    } else {
        52
    }
}
