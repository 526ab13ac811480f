//! Region priority list and display names.

/// Region codes tried in order when resolving an application.
///
/// Ordered by how likely a watched application is to ship there; the
/// resolver stops at the first match, so order affects cost, not
/// correctness.
pub const DEFAULT_REGIONS: &[&str] = &[
    "cn", "us", "hk", "tw", "jp", "kr", "sg", "gb", "de", "fr", "ca", "au", "ru", "in",
];

/// Human-readable name for a region code.
///
/// Falls back to the uppercased raw code for regions not in the table.
pub fn region_name(code: &str) -> String {
    let name = match code.to_ascii_lowercase().as_str() {
        "cn" => "China",
        "us" => "United States",
        "hk" => "Hong Kong",
        "tw" => "Taiwan",
        "jp" => "Japan",
        "kr" => "South Korea",
        "sg" => "Singapore",
        "gb" => "United Kingdom",
        "de" => "Germany",
        "fr" => "France",
        "ca" => "Canada",
        "au" => "Australia",
        "ru" => "Russia",
        "in" => "India",
        _ => return code.to_ascii_uppercase(),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_translate() {
        assert_eq!(region_name("cn"), "China");
        assert_eq!(region_name("us"), "United States");
        assert_eq!(region_name("gb"), "United Kingdom");
    }

    #[test]
    fn translation_is_case_insensitive() {
        assert_eq!(region_name("CN"), "China");
        assert_eq!(region_name("Us"), "United States");
    }

    #[test]
    fn unknown_codes_fall_back_to_uppercase() {
        assert_eq!(region_name("br"), "BR");
        assert_eq!(region_name("xx"), "XX");
    }

    #[test]
    fn default_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for code in DEFAULT_REGIONS {
            assert!(seen.insert(code), "duplicate region {code}");
        }
    }
}
