//! Encoding and decoding of the date codes stamped on manufactured goods.
//!
//! A date code records where (factory location code) and when (month, or ISO
//! week from 2007 on) an item was made. The grammar changed over time; each
//! era lives in its own module under [`codec`] and [`codec::Era`] dispatches
//! to the one the caller selects.
//!
//! ```
//! use datecode::codec::{late_1980, nineties};
//! use datecode::domain::Country;
//!
//! assert_eq!(late_1980::encode("fr", 1987, 11).unwrap(), "8711FR");
//!
//! let decoded = nineties::decode("SD0934").unwrap();
//! assert_eq!((decoded.period.year, decoded.period.month), (1994, 3));
//! assert!(decoded.factory.countries().contains(Country::Usa));
//! ```

pub mod clock;
pub mod codec;
pub mod configuration;
pub mod domain;
pub mod errors;
pub mod telemetry;

pub use codec::{DecodedDateCode, Era};
pub use errors::{DateCodeError, ErrorKind};
