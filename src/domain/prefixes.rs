//! Carrier prefix tables.
//!
//! Entries keep the national trunk `0`; matching compares everything after it.

/// Known Safaricom number ranges.
pub const SAFARICOM_PREFIXES: &[&str] = &[
    "0700", "0701", "0702", "0703", "0704", "0705", "0706", "0707", "0708", "0709", //
    "0710", "0711", "0712", "0713", "0714", "0715", "0716", "0717", "0718", "0719", //
    "0720", "0721", "0722", "0723", "0724", "0725", "0726", "0727", "0728", "0729", //
    "0740", "0741", "0742", "0743", "0745", "0746", "0748", //
    "0757", "0758", "0759", //
    "0768", "0769", //
    "0790", "0791", "0792", "0793", "0794", "0795", "0796", "0797", "0798", "0799", //
    "0110", "0111", "0112", "0113", "0114", "0115",
];

/// Known Airtel Kenya number ranges.
pub const AIRTEL_PREFIXES: &[&str] = &[
    // 073x
    "0730", "0731", "0732", "0733", "0734", "0735", "0736", "0737", "0738", "0739",
    // 075x
    "0750", "0751", "0752", "0753", "0754", "0755", "0756",
    // 078x
    "0780", "0781", "0782", "0783", "0784", "0785", "0786", "0787", "0788", "0789",
    // 010x
    "0100", "0101", "0102", "0103", "0104", "0105", "0106", "0107", "0108", "0109",
];

/// Returns true if `subscriber` starts with any table entry, ignoring the entry's trunk `0`.
pub fn matches_any(table: &[&str], subscriber: &str) -> bool {
    table.iter().any(|prefix| {
        let significant = prefix.strip_prefix('0').unwrap_or(prefix);
        subscriber.starts_with(significant)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_four_digit_trunk_prefixes() {
        for prefix in SAFARICOM_PREFIXES.iter().chain(AIRTEL_PREFIXES) {
            assert_eq!(prefix.len(), 4, "bad prefix {}", prefix);
            assert!(prefix.starts_with('0'));
            assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_tables_are_disjoint() {
        for prefix in SAFARICOM_PREFIXES {
            assert!(
                !AIRTEL_PREFIXES.contains(prefix),
                "{} listed for both carriers",
                prefix
            );
        }
    }

    #[test]
    fn test_matches_any_ignores_trunk_zero() {
        assert!(matches_any(SAFARICOM_PREFIXES, "712345678"));
        assert!(matches_any(SAFARICOM_PREFIXES, "112345678"));
        assert!(!matches_any(SAFARICOM_PREFIXES, "0712345678"));
        assert!(matches_any(AIRTEL_PREFIXES, "733123456"));
        assert!(!matches_any(AIRTEL_PREFIXES, "744123456"));
    }
}
