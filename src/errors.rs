use std::fmt::Formatter;

/// The four failure classes a date code operation can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NullOrEmptyInput,
    Format,
    Range,
    Lookup,
}

#[derive(Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateCodeError {
    #[error("`{0}` cannot be empty.")]
    EmptyInput(&'static str),

    // Factory code or date code does not match the expected grammar
    #[error("Invalid {what}: '{value}'. {reason}")]
    InvalidFormat {
        what: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field} {value} is out of range (expected {min}..={max}).")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unknown factory location code: '{0}'.")]
    UnknownFactoryCode(String),
}

impl DateCodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput(_) => ErrorKind::NullOrEmptyInput,
            Self::InvalidFormat { .. } => ErrorKind::Format,
            Self::OutOfRange { .. } => ErrorKind::Range,
            Self::UnknownFactoryCode(_) => ErrorKind::Lookup,
        }
    }

    pub(crate) fn invalid_format(
        what: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            what,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(
        field: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl std::fmt::Debug for DateCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Writes an error followed by every `source` in its chain.
pub fn error_chain_fmt(e: &impl std::error::Error, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
