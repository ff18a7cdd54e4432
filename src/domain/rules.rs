//! Data-driven validation rules.
//!
//! Every field validates through a [`PhoneRule`]: either a carrier prefix
//! table plus a subscriber length, or the generic mobile pattern.

use super::carrier::Carrier;
use super::errors::ValidationError;
use super::normalize::strip_country_code;
use super::prefixes::matches_any;
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits left once the country code or trunk `0` is removed.
pub const SUBSCRIBER_DIGITS: usize = 9;

/// `+254`, `254` or `0`, then `7` or `1` and eight more digits.
static KENYAN_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+?254|0)(7[0-9]{8}|1[0-9]{8})$")
        .expect("Failed to compile Kenyan mobile regex")
});

/// A validation rule for one kind of phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRule {
    /// Subscriber part must start with one of the carrier's prefixes and
    /// be exactly `length` characters long.
    Prefix { carrier: Carrier, length: usize },
    /// Whole value must match the generic Kenyan mobile pattern.
    KenyanMobile,
}

impl PhoneRule {
    /// Safaricom prefixes with nine subscriber digits.
    pub fn safaricom() -> Self {
        PhoneRule::Prefix {
            carrier: Carrier::Safaricom,
            length: SUBSCRIBER_DIGITS,
        }
    }

    /// Airtel Kenya prefixes with nine subscriber digits.
    pub fn airtel() -> Self {
        PhoneRule::Prefix {
            carrier: Carrier::Airtel,
            length: SUBSCRIBER_DIGITS,
        }
    }

    /// Generic `07…` / `01…` mobile pattern.
    pub fn kenyan_mobile() -> Self {
        PhoneRule::KenyanMobile
    }

    /// Validate `value`. Blank or absent values always pass.
    ///
    /// For prefix rules the prefix is checked before the length, and the
    /// first failure is returned.
    pub fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(()),
        };

        match *self {
            PhoneRule::Prefix { carrier, length } => {
                let subscriber = strip_country_code(value);

                if !matches_any(carrier.prefixes(), subscriber) {
                    return Err(ValidationError::InvalidPrefix {
                        value: value.to_string(),
                        carrier: carrier.display_name(),
                    });
                }

                if subscriber.chars().count() != length {
                    return Err(ValidationError::InvalidLength {
                        value: value.to_string(),
                        expected: length,
                    });
                }

                Ok(())
            }
            PhoneRule::KenyanMobile => {
                if KENYAN_MOBILE_REGEX.is_match(value) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidFormat(value.to_string()))
                }
            }
        }
    }
}
