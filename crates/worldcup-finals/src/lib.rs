//! FIFA World Cup Finals
//!
//! The fixed table of World Cup finals, the per-country win counts derived
//! from it, and the two selection lookups the dashboard answers.
//!
//! All data is compiled in and read-only; nothing here performs I/O.

mod dataset;
mod error;
mod lookup;
mod territory;
mod types;
mod wins;

pub use dataset::{final_for_year, finals, years};
pub use error::{FinalsError, Result};
pub use lookup::{
    country_message, pluralize_times, year_message, COUNTRY_PROMPT, YEAR_PROMPT,
};
pub use territory::territory_code;
pub use types::{CountryWins, MatchRecord};
pub use wins::{aggregate, country_wins, win_counts, WinCounts};
