use crate::domain::country::{lookup_countries, Countries};
use crate::errors::DateCodeError;
use std::fmt::Display;

/// A factory location code accepted for stamping: exactly two ASCII letters,
/// stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryCode(String);

impl FactoryCode {
    const LENGTH: usize = 2;

    /// Parse a factory location code into a validated FactoryCode
    ///
    /// Rules:
    /// - Cannot be empty or only whitespaces
    /// - Must be exactly two letters
    /// - Case-insensitive, stored upper-cased
    pub fn parse(s: &str) -> Result<Self, DateCodeError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(DateCodeError::EmptyInput("factory_location_code"));
        }

        let is_two_letters = trimmed.chars().count() == Self::LENGTH
            && trimmed.chars().all(|c| c.is_ascii_alphabetic());

        if !is_two_letters {
            return Err(DateCodeError::invalid_format(
                "factory location code",
                s,
                "Must be exactly two letters (e.g., 'FL', 'SD').",
            ));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FactoryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for FactoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl serde::Serialize for FactoryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for FactoryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FactoryCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A factory location code read off a stamp, with the countries it maps to.
///
/// The code is kept upper-cased. A few historical table entries contain
/// digits or three letters; those answer `lookup_countries` but never match
/// the two-letter stamp.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FactoryLocation {
    code: String,
    countries: Countries,
}

impl FactoryLocation {
    /// Resolves the two stamped characters of a date code, taken as is.
    pub fn resolve(code: &str) -> Result<Self, DateCodeError> {
        let is_two_letters =
            code.len() == FactoryCode::LENGTH && code.bytes().all(|b| b.is_ascii_alphabetic());

        if !is_two_letters {
            return Err(DateCodeError::invalid_format(
                "factory location code",
                code,
                "A stamped factory location code is two letters.",
            ));
        }

        let countries = lookup_countries(code)?;

        Ok(Self {
            code: code.to_ascii_uppercase(),
            countries,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn countries(&self) -> &Countries {
        &self.countries
    }
}

impl Display for FactoryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.countries)
    }
}
