//! Factory location lookup.
//!
//! Maps the two-letter factory location codes stamped next to a date code to
//! the countries that operate a workshop under that code. Codes are not
//! unique: the same code is used in more than one country, so a lookup always
//! yields a set.

use crate::errors::DateCodeError;
use std::collections::BTreeSet;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Country {
    France,
    Germany,
    Italy,
    Spain,
    Switzerland,
    #[serde(rename = "USA")]
    Usa,
}

// Source: https://www.yoogiscloset.com/authenticate/louis-vuitton/
const FACTORY_CODES: &[(Country, &[&str])] = &[
    (
        Country::France,
        &[
            "A0", "A1", "A2", "AA", "AAS", "AH", "AN", "AR", "AS", "BA", "BJ", "BU", "DR", "DU",
            "DT", "CO", "CT", "CX", "ET", "FL", "FR", "LA", "LW", "MB", "MI", "NO", "RA", "RI",
            "SA", "SD", "SF", "SL", "SN", "SP", "SR", "TA", "TJ", "TH", "TN", "TR", "TS", "VI",
            "VX",
        ],
    ),
    (Country::Germany, &["LP", "OL"]),
    (
        Country::Italy,
        &[
            "BC", "BO", "CE", "FN", "FO", "MA", "NZ", "OB", "PL", "RC", "RE", "SA", "TD",
        ],
    ),
    (
        Country::Spain,
        &["BC", "CA", "LO", "LB", "LM", "LW", "GI", "UB"],
    ),
    (Country::Switzerland, &["DI", "FA"]),
    (Country::Usa, &["FC", "FH", "LA", "OS", "SD", "FL", "TX"]),
];

impl Country {
    pub const ALL: [Country; 6] = [
        Country::France,
        Country::Germany,
        Country::Italy,
        Country::Spain,
        Country::Switzerland,
        Country::Usa,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Italy => "Italy",
            Self::Spain => "Spain",
            Self::Switzerland => "Switzerland",
            Self::Usa => "USA",
        }
    }

    /// Factory location codes used by workshops in this country.
    pub fn factory_codes(&self) -> &'static [&'static str] {
        FACTORY_CODES
            .iter()
            .find(|(country, _)| country == self)
            .map(|(_, codes)| *codes)
            .unwrap_or_default()
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A non-empty set of countries sharing one factory location code.
///
/// Equality ignores the order in which countries were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countries(BTreeSet<Country>);

impl Countries {
    pub fn contains(&self, country: Country) -> bool {
        self.0.contains(&country)
    }

    pub fn iter(&self) -> impl Iterator<Item = Country> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a lookup that finds nothing is an error instead.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_set(&self) -> &BTreeSet<Country> {
        &self.0
    }
}

impl Display for Countries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(|c| c.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl serde::Serialize for Countries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// Finds every country whose workshops use `factory_location_code`.
///
/// The code is trimmed and upper-cased before matching.
#[tracing::instrument(name = "Looking up factory location code")]
pub fn lookup_countries(factory_location_code: &str) -> Result<Countries, DateCodeError> {
    let trimmed = factory_location_code.trim();

    if trimmed.is_empty() {
        return Err(DateCodeError::EmptyInput("factory_location_code"));
    }

    let uppercased = trimmed.to_uppercase();

    let found: BTreeSet<Country> = FACTORY_CODES
        .iter()
        .filter(|(_, codes)| codes.contains(&uppercased.as_str()))
        .map(|(country, _)| *country)
        .collect();

    if found.is_empty() {
        tracing::debug!(code = %uppercased, "No country uses this factory location code");
        return Err(DateCodeError::UnknownFactoryCode(uppercased));
    }

    Ok(Countries(found))
}
