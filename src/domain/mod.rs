mod country;
mod factory_code;
mod period;

pub use country::{lookup_countries, Countries, Country};
pub use factory_code::{FactoryCode, FactoryLocation};
pub use period::{iso_weeks_in_year, ManufacturingPeriod, YearMonth, YearWeek};
