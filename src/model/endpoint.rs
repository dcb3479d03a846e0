/// A resource path on the API, rendered as `/leagues`, `/standings`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Endpoint {
    #[strum(serialize = "/leagues")]
    Leagues,
    #[strum(serialize = "/standings")]
    Standings,
    #[strum(serialize = "/fixtures")]
    Fixtures,
}

/// Which games a block of standings statistics covers.
///
/// Renders as the column prefix used when flattening (`all`, `home`, `away`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Split {
    All,
    Home,
    Away,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Leagues.to_string(), "/leagues");
        assert_eq!(Endpoint::Standings.to_string(), "/standings");
        assert_eq!(Endpoint::Fixtures.to_string(), "/fixtures");
    }

    #[test]
    fn test_split_prefixes() {
        let prefixes: Vec<String> = Split::iter().map(|s| s.to_string()).collect();
        assert_eq!(prefixes, ["all", "home", "away"]);
    }
}
