//! Selection lookups
//!
//! Each lookup maps an optional selection to the sentence shown for it.
//! `None` means nothing is selected and yields a fixed prompt.

use crate::dataset::final_for_year;
use crate::error::{FinalsError, Result};
use crate::wins::win_counts;

/// Shown while no country is selected
pub const COUNTRY_PROMPT: &str = "Please select a country to view the number of World Cup wins.";

/// Shown while no year is selected
pub const YEAR_PROMPT: &str = "Please select a year to view the final match details.";

/// "time" for exactly one, "times" otherwise
pub fn pluralize_times(count: u32) -> &'static str {
    if count == 1 {
        "time"
    } else {
        "times"
    }
}

/// Describe how many finals the selected country has won
pub fn country_message(country: Option<&str>) -> Result<String> {
    let Some(country) = country else {
        return Ok(COUNTRY_PROMPT.to_string());
    };

    let wins = win_counts()
        .get(country)
        .ok_or_else(|| FinalsError::UnknownCountry(country.to_string()))?;

    Ok(format!(
        "{country} has won the FIFA World Cup {wins} {}.",
        pluralize_times(wins)
    ))
}

/// Describe the final played in the selected year
pub fn year_message(year: Option<u16>) -> Result<String> {
    let Some(year) = year else {
        return Ok(YEAR_PROMPT.to_string());
    };

    let record = final_for_year(year).ok_or(FinalsError::UnknownYear(year))?;

    Ok(format!(
        "In {year}, the winner was {} and the runner-up was {}.",
        record.winner, record.runner_up
    ))
}
