//! Per-country win counts derived from the finals table

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::dataset::finals;
use crate::territory::territory_code;
use crate::types::{CountryWins, MatchRecord};

/// Country name to number of finals won.
///
/// Keys are exactly the distinct winners of the records it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WinCounts(BTreeMap<&'static str, u32>);

impl WinCounts {
    pub fn get(&self, country: &str) -> Option<u32> {
        self.0.get(country).copied()
    }

    /// Winning countries in alphabetical order
    pub fn countries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.0.iter().map(|(country, wins)| (*country, *wins))
    }

    /// Sum of all counts; equals the number of aggregated records
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Group records on winner and count them
pub fn aggregate(records: &[MatchRecord]) -> WinCounts {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.winner).or_insert(0) += 1;
    }
    debug!(
        records = records.len(),
        countries = counts.len(),
        "Aggregated World Cup wins"
    );
    WinCounts(counts)
}

lazy_static::lazy_static! {
    static ref WIN_COUNTS: WinCounts = aggregate(finals());
}

/// Win counts over the full finals table, computed once
pub fn win_counts() -> &'static WinCounts {
    &WIN_COUNTS
}

/// Win counts joined with territory codes, alphabetical by country
pub fn country_wins() -> Vec<CountryWins> {
    win_counts()
        .iter()
        .map(|(country, wins)| CountryWins {
            country,
            wins,
            territory_code: territory_code(country),
        })
        .collect()
}
