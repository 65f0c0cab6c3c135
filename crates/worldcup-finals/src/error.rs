use std::fmt;

/// Errors from the finals lookups.
///
/// Both variants mean a selection was made that the data cannot answer.
/// Offered selections are always derived from the data itself, so callers
/// should treat these as internal-consistency faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalsError {
    UnknownCountry(String),
    UnknownYear(u16),
}

impl fmt::Display for FinalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCountry(country) => {
                write!(f, "Country has no recorded World Cup wins: {country}")
            }
            Self::UnknownYear(year) => write!(f, "No World Cup final recorded for {year}"),
        }
    }
}

impl std::error::Error for FinalsError {}

pub type Result<T> = std::result::Result<T, FinalsError>;
