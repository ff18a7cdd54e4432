//! Mobile network operators with known number ranges.

use super::normalize::strip_country_code;
use super::prefixes::{matches_any, AIRTEL_PREFIXES, SAFARICOM_PREFIXES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Kenyan mobile carrier identified by its prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    Safaricom,
    Airtel,
}

impl Carrier {
    /// All carriers, in detection order.
    pub const ALL: [Carrier; 2] = [Carrier::Safaricom, Carrier::Airtel];

    /// Human-readable name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Carrier::Safaricom => "Safaricom",
            Carrier::Airtel => "Airtel Kenya",
        }
    }

    /// The carrier's prefix table.
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            Carrier::Safaricom => SAFARICOM_PREFIXES,
            Carrier::Airtel => AIRTEL_PREFIXES,
        }
    }

    /// Identify the carrier owning `value`'s range.
    ///
    /// Only the prefix is inspected; the digit count is not checked.
    pub fn detect(value: &str) -> Option<Carrier> {
        let subscriber = strip_country_code(value);
        Self::ALL
            .into_iter()
            .find(|carrier| matches_any(carrier.prefixes(), subscriber))
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_carrier() {
        assert_eq!(Carrier::detect("0712345678"), Some(Carrier::Safaricom));
        assert_eq!(Carrier::detect("254112345678"), Some(Carrier::Safaricom));
        assert_eq!(Carrier::detect("+254733123456"), Some(Carrier::Airtel));
        assert_eq!(Carrier::detect("0100123456"), Some(Carrier::Airtel));
        assert_eq!(Carrier::detect("0744123456"), None);
        assert_eq!(Carrier::detect(""), None);
    }

    #[test]
    fn test_carrier_serialization() {
        let json = serde_json::to_string(&Carrier::Airtel).unwrap();
        assert_eq!(json, "\"airtel\"");
        assert_eq!(Carrier::Airtel.to_string(), "Airtel Kenya");
    }
}
