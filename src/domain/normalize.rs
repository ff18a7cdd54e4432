//! Normalization of Kenyan numbers into the canonical `254XXXXXXXXX` form.
//!
//! Normalization never fails. Input that carries no recognizable marker
//! (`+254`, `254`, `0`) goes through the configured [`FallbackPolicy`].

use tracing::debug;

/// Country calling code for Kenya, and the start of every canonical number.
pub const COUNTRY_CODE: &str = "254";

/// Country code in international dialing notation.
pub const INTERNATIONAL_PREFIX: &str = "+254";

/// What to do with input that has none of the recognized leading markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Prepend `254` unconditionally. `"9999999"` becomes `"2549999999"`.
    #[default]
    Prepend,
    /// Return the input untouched so validation can reject it.
    Preserve,
}

/// How the generic field converts values for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageNormalization {
    /// Strip `+254` only, matching rows written by earlier releases.
    #[default]
    Legacy,
    /// Use the same rule as the logical direction (strip any single `+`).
    Unified,
}

/// Knobs shared by every normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    pub fallback: FallbackPolicy,
    pub storage: StorageNormalization,
}

/// Remove one leading `+254`, `254` or `0` (first match wins).
///
/// This is the validation view of a number: the subscriber part that carrier
/// prefixes and digit counts are checked against. It is not the stored form.
pub fn strip_country_code(value: &str) -> &str {
    value
        .strip_prefix(INTERNATIONAL_PREFIX)
        .or_else(|| value.strip_prefix(COUNTRY_CODE))
        .or_else(|| value.strip_prefix('0'))
        .unwrap_or(value)
}

/// Canonicalize a number the way carrier fields do in both directions.
///
/// `+254…` and `0…` are rewritten to `254…`, `254…` is returned as-is and
/// anything else goes through the fallback policy. Empty input is returned unchanged.
pub fn to_canonical(value: &str, options: NormalizeOptions) -> String {
    if value.is_empty() {
        return String::new();
    }

    if let Some(rest) = value.strip_prefix(INTERNATIONAL_PREFIX) {
        format!("{COUNTRY_CODE}{rest}")
    } else if let Some(rest) = value.strip_prefix('0') {
        format!("{COUNTRY_CODE}{rest}")
    } else if value.starts_with(COUNTRY_CODE) {
        value.to_string()
    } else {
        fallback(value, options.fallback)
    }
}

/// Canonicalize a number the way the generic field reads it.
///
/// Differs from [`to_canonical`] by dropping any single leading `+` first,
/// so `"+0712345678"` becomes `"254712345678"`.
pub fn to_canonical_lenient_plus(value: &str, options: NormalizeOptions) -> String {
    if value.is_empty() {
        return String::new();
    }

    let value = value.strip_prefix('+').unwrap_or(value);

    if value.starts_with(COUNTRY_CODE) {
        value.to_string()
    } else if let Some(rest) = value.strip_prefix('0') {
        format!("{COUNTRY_CODE}{rest}")
    } else {
        fallback(value, options.fallback)
    }
}

fn fallback(value: &str, policy: FallbackPolicy) -> String {
    match policy {
        FallbackPolicy::Prepend => {
            debug!(value, "no country code or trunk prefix, prepending {}", COUNTRY_CODE);
            format!("{COUNTRY_CODE}{value}")
        }
        FallbackPolicy::Preserve => {
            debug!(value, "no country code or trunk prefix, leaving value untouched");
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> NormalizeOptions {
        NormalizeOptions {
            fallback: FallbackPolicy::Preserve,
            ..Default::default()
        }
    }

    #[test]
    fn test_strip_country_code_priority() {
        assert_eq!(strip_country_code("+254712345678"), "712345678");
        assert_eq!(strip_country_code("254712345678"), "712345678");
        assert_eq!(strip_country_code("0712345678"), "712345678");
        assert_eq!(strip_country_code("712345678"), "712345678");
        // only one marker is removed
        assert_eq!(strip_country_code("2540712345678"), "0712345678");
    }

    #[test]
    fn test_to_canonical_rewrites_markers() {
        let opts = NormalizeOptions::default();
        assert_eq!(to_canonical("0712345678", opts), "254712345678");
        assert_eq!(to_canonical("+254733123456", opts), "254733123456");
        assert_eq!(to_canonical("254712345678", opts), "254712345678");
        assert_eq!(to_canonical("", opts), "");
    }

    #[test]
    fn test_to_canonical_fallback_prepends_by_default() {
        assert_eq!(
            to_canonical("9999999", NormalizeOptions::default()),
            "2549999999"
        );
        assert_eq!(
            to_canonical("+1555123", NormalizeOptions::default()),
            "254+1555123"
        );
    }

    #[test]
    fn test_to_canonical_fallback_preserve() {
        assert_eq!(to_canonical("9999999", strict()), "9999999");
        assert_eq!(to_canonical("0712345678", strict()), "254712345678");
    }

    #[test]
    fn test_lenient_plus_strips_any_plus() {
        let opts = NormalizeOptions::default();
        assert_eq!(to_canonical_lenient_plus("+0712345678", opts), "254712345678");
        assert_eq!(to_canonical_lenient_plus("+254712345678", opts), "254712345678");
        assert_eq!(to_canonical_lenient_plus("712345678", opts), "254712345678");
        assert_eq!(to_canonical("+0712345678", opts), "254+0712345678");
    }

    #[test]
    fn test_canonical_is_idempotent() {
        let opts = NormalizeOptions::default();
        for input in ["0712345678", "+254733123456", "254112345678", "0112345678"] {
            let once = to_canonical(input, opts);
            assert_eq!(to_canonical(&once, opts), once);
            assert_eq!(to_canonical_lenient_plus(&once, opts), once);
        }
    }
}
