//! Country extraction from free-text affiliation strings.

use compact_str::CompactString;

/// Extract the country token from an affiliation string.
///
/// The last comma-delimited segment of an affiliation is assumed to be the
/// country (`"Dept of CS, MIT, Cambridge, USA"` gives `"USA"`); strings
/// without a comma are returned whole, trimmed. Affiliations that do not
/// end with a country yield whatever their last segment happens to be,
/// a known limitation of the heuristic, not validated here.
pub(crate) fn extract_country(affiliation: &str) -> CompactString {
    match affiliation.rsplit_once(',') {
        Some((_, last)) => CompactString::new(last.trim()),
        None => CompactString::new(affiliation.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("Dept of CS, MIT, Cambridge, USA", "USA")]
    #[case("A., Dept X, USA", "USA")]
    #[case("Unknown", "Unknown")]
    #[case("ETH Zurich", "ETH Zurich")]
    #[case(" B., Dept Y, UK", "UK")]
    #[case("Uni A,  France  ", "France")]
    #[case("", "")]
    #[case("Lab,", "")]
    fn test_extract_country(#[case] affiliation: &str, #[case] expected: &str) {
        assert_eq!(extract_country(affiliation), expected);
    }
}
