use crate::types::MatchRecord;

const fn record(year: u16, winner: &'static str, runner_up: &'static str) -> MatchRecord {
    MatchRecord {
        year,
        winner,
        runner_up,
    }
}

/// Every World Cup final through 2018, in year order.
static FINALS: [MatchRecord; 21] = [
    record(1930, "Uruguay", "Argentina"),
    record(1934, "Italy", "Czechoslovakia"),
    record(1938, "Italy", "Hungary"),
    record(1950, "Uruguay", "Brazil"),
    record(1954, "Germany", "Hungary"),
    record(1958, "Brazil", "Sweden"),
    record(1962, "Brazil", "Czechoslovakia"),
    record(1966, "England", "Germany"),
    record(1970, "Brazil", "Italy"),
    record(1974, "Germany", "Netherlands"),
    record(1978, "Argentina", "Netherlands"),
    record(1982, "Italy", "Germany"),
    record(1986, "Argentina", "Germany"),
    record(1990, "Germany", "Argentina"),
    record(1994, "Brazil", "Italy"),
    record(1998, "France", "Brazil"),
    record(2002, "Brazil", "Germany"),
    record(2006, "Italy", "France"),
    record(2010, "Spain", "Netherlands"),
    record(2014, "Germany", "Argentina"),
    record(2018, "France", "Croatia"),
];

/// All recorded finals, ordered by year
pub fn finals() -> &'static [MatchRecord] {
    &FINALS
}

/// The final played in `year`, if there was one
pub fn final_for_year(year: u16) -> Option<&'static MatchRecord> {
    FINALS.iter().find(|r| r.year == year)
}

/// Years with a recorded final, ascending
pub fn years() -> Vec<u16> {
    let mut years: Vec<u16> = FINALS.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_finals_count() {
        assert_eq!(finals().len(), 21);
    }

    #[test]
    fn test_years_are_unique() {
        let unique: HashSet<u16> = finals().iter().map(|r| r.year).collect();
        assert_eq!(unique.len(), finals().len());
    }

    #[test]
    fn test_years_sorted() {
        let years = years();
        assert_eq!(years.first(), Some(&1930));
        assert_eq!(years.last(), Some(&2018));
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_final_for_year() {
        let final_1970 = final_for_year(1970).unwrap();
        assert_eq!(final_1970.winner, "Brazil");
        assert_eq!(final_1970.runner_up, "Italy");
    }

    #[test]
    fn test_final_for_year_not_played() {
        // No tournaments during the war
        assert!(final_for_year(1942).is_none());
        assert!(final_for_year(1946).is_none());
    }

    #[test]
    fn test_winner_never_runner_up_of_same_final() {
        for r in finals() {
            assert_ne!(r.winner, r.runner_up, "final {}", r.year);
        }
    }
}
