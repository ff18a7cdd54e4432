//! KenyanPhoneNumber value object.

use super::carrier::Carrier;
use super::errors::ValidationError;
use super::normalize::{to_canonical_lenient_plus, NormalizeOptions, COUNTRY_CODE};
use super::rules::PhoneRule;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Kenyan mobile number held in canonical `254…` form.
///
/// # Example
///
/// ```
/// use kenyan_phone_fields::domain::KenyanPhoneNumber;
///
/// let phone = KenyanPhoneNumber::new("0712345678").unwrap();
/// assert_eq!(phone.as_str(), "254712345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KenyanPhoneNumber(String);

impl KenyanPhoneNumber {
    /// Create a new KenyanPhoneNumber from any accepted input format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Must be `+254`, `254` or `0` followed by `7` or `1` and eight digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` for blank input and
    /// `ValidationError::InvalidFormat` for anything else that does not match.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref();

        if phone.is_empty() {
            return Err(ValidationError::Empty);
        }

        PhoneRule::kenyan_mobile().validate(Some(phone))?;

        Ok(Self(to_canonical_lenient_plus(
            phone,
            NormalizeOptions::default(),
        )))
    }

    /// Get the canonical number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The nine subscriber digits after the country code.
    pub fn subscriber(&self) -> &str {
        &self.0[COUNTRY_CODE.len()..]
    }

    /// National format with trunk prefix, e.g. `0712345678`.
    pub fn national(&self) -> String {
        format!("0{}", self.subscriber())
    }

    /// International format, e.g. `+254712345678`.
    pub fn international(&self) -> String {
        format!("+{}", self.0)
    }

    /// The carrier owning this number's range, if known.
    pub fn carrier(&self) -> Option<Carrier> {
        Carrier::detect(&self.0)
    }
}

impl Serialize for KenyanPhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KenyanPhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        KenyanPhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for KenyanPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = KenyanPhoneNumber::new("+254733123456").unwrap();
        assert_eq!(phone.as_str(), "254733123456");
        assert_eq!(phone.carrier(), Some(Carrier::Airtel));
    }

    #[test]
    fn test_phone_validates_format() {
        assert_eq!(KenyanPhoneNumber::new(""), Err(ValidationError::Empty));
        assert!(KenyanPhoneNumber::new("0212345678").is_err());
        assert!(KenyanPhoneNumber::new("9999999").is_err());
        assert!(KenyanPhoneNumber::new("0112345678").is_ok());
        assert!(KenyanPhoneNumber::new("254712345678").is_ok());
    }

    #[test]
    fn test_phone_formats() {
        let phone = KenyanPhoneNumber::new("0712345678").unwrap();
        assert_eq!(phone.subscriber(), "712345678");
        assert_eq!(phone.national(), "0712345678");
        assert_eq!(phone.international(), "+254712345678");
        assert_eq!(format!("{}", phone), "254712345678");
    }

    #[test]
    fn test_phone_unknown_carrier() {
        let phone = KenyanPhoneNumber::new("0744123456").unwrap();
        assert_eq!(phone.carrier(), None);
    }

    #[test]
    fn test_phone_serialization() {
        let phone = KenyanPhoneNumber::new("0712345678").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"254712345678\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: KenyanPhoneNumber = serde_json::from_str("\"+254712345678\"").unwrap();
        assert_eq!(phone.as_str(), "254712345678");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<KenyanPhoneNumber, _> = serde_json::from_str("\"0212345678\"");
        assert!(result.is_err());
    }
}
