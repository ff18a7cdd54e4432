//! Cleaning several fields at once with per-field error collection.

use super::traits::PhoneField;
use crate::error::FieldErrors;
use std::collections::BTreeMap;
use tracing::debug;

/// Clean every field against its raw value in `values`.
///
/// Fields missing from `values` are cleaned as absent. Returns the logical
/// values keyed by field name, or every error raised across all fields.
pub fn clean_record(
    fields: &[&dyn PhoneField],
    values: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, Option<String>>, FieldErrors> {
    let mut cleaned = BTreeMap::new();
    let mut errors = FieldErrors::new();

    for field in fields {
        let raw = values.get(field.name()).map(String::as_str);
        match field.clean(raw) {
            Ok(value) => {
                cleaned.insert(field.name().to_string(), value);
            }
            Err(field_errors) => {
                debug!(
                    field = field.name(),
                    count = field_errors.len(),
                    "field failed validation"
                );
                errors.extend(field.name(), field_errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(cleaned)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::PhoneNumberField;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_clean_record_success() {
        let mpesa = PhoneNumberField::safaricom("mpesa");
        let contact = PhoneNumberField::kenyan("contact");

        let cleaned = clean_record(
            &[&mpesa, &contact],
            &values(&[("mpesa", "0712345678"), ("contact", "+254112345678")]),
        )
        .unwrap();

        assert_eq!(cleaned["mpesa"].as_deref(), Some("254712345678"));
        assert_eq!(cleaned["contact"].as_deref(), Some("254112345678"));
    }

    #[test]
    fn test_clean_record_missing_value_is_absent() {
        let airtel = PhoneNumberField::airtel("airtel");
        let cleaned = clean_record(&[&airtel], &BTreeMap::new()).unwrap();
        assert_eq!(cleaned["airtel"], None);
    }

    #[test]
    fn test_clean_record_collects_all_failures() {
        let mpesa = PhoneNumberField::safaricom("mpesa");
        let airtel = PhoneNumberField::airtel("airtel");
        let contact = PhoneNumberField::kenyan("contact");

        let errors = clean_record(
            &[&mpesa, &airtel, &contact],
            &values(&[
                ("mpesa", "0733123456"),
                ("airtel", "0733123456"),
                ("contact", "0212345678"),
            ]),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("mpesa").len(), 1);
        assert!(errors.get("airtel").is_empty());
        assert_eq!(errors.get("contact").len(), 1);
    }
}
