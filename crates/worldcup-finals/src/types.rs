//! Core types for the World Cup finals data

use serde::Serialize;

/// One World Cup final. `year` is unique across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub year: u16,
    pub winner: &'static str,
    pub runner_up: &'static str,
}

/// A winning country joined with its map territory code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryWins {
    pub country: &'static str,
    pub wins: u32,
    /// `None` when the country has no entry in the territory table; such
    /// rows are not coloured on the map.
    pub territory_code: Option<&'static str>,
}
