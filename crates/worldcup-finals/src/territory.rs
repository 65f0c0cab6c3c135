use std::collections::HashMap;

/// Map a winning country's name to the ISO 3166-1 alpha-3 code used to
/// colour it on the map.
///
/// England is drawn as GBR. Countries missing here are not coloured.
pub fn territory_code(country: &str) -> Option<&'static str> {
    TERRITORY_CODES.get(country).copied()
}

lazy_static::lazy_static! {
    static ref TERRITORY_CODES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Uruguay", "URY");
        m.insert("Italy", "ITA");
        m.insert("Germany", "DEU");
        m.insert("Brazil", "BRA");
        m.insert("England", "GBR");
        m.insert("Argentina", "ARG");
        m.insert("France", "FRA");
        m.insert("Spain", "ESP");
        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(territory_code("Brazil"), Some("BRA"));
        assert_eq!(territory_code("Germany"), Some("DEU"));
        assert_eq!(territory_code("England"), Some("GBR"));
    }

    #[test]
    fn test_runner_up_only_country_has_no_code() {
        assert_eq!(territory_code("Netherlands"), None);
        assert_eq!(territory_code("Croatia"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(territory_code("brazil"), None);
    }
}
