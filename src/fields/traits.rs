use crate::domain::ValidationError;

/// A storable phone number field.
///
/// Hosts call [`to_logical`](PhoneField::to_logical) on values read from
/// input or storage, [`to_storage`](PhoneField::to_storage) before writing,
/// and [`clean`](PhoneField::clean) during their validation pass.
pub trait PhoneField: Send + Sync {
    /// Field name used as the error key.
    fn name(&self) -> &str;

    /// Maximum number of characters the column holds.
    fn max_length(&self) -> usize;

    /// Convert an input or stored value to its logical form.
    fn to_logical(&self, value: Option<&str>) -> Option<String>;

    /// Convert a logical value to its storage form.
    fn to_storage(&self, value: Option<&str>) -> Option<String>;

    /// Run the field's validator against `value`.
    fn run_validators(&self, value: Option<&str>) -> Result<(), ValidationError>;

    /// Convert, validate and length-check `value`, collecting every error.
    fn clean(&self, value: Option<&str>) -> Result<Option<String>, Vec<ValidationError>> {
        let logical = self.to_logical(value);
        let mut errors = Vec::new();

        if let Err(e) = self.run_validators(logical.as_deref()) {
            errors.push(e);
        }

        if let Some(v) = logical.as_deref() {
            let actual = v.chars().count();
            if actual > self.max_length() {
                errors.push(ValidationError::TooLong {
                    max: self.max_length(),
                    actual,
                });
            }
        }

        if errors.is_empty() {
            Ok(logical)
        } else {
            Err(errors)
        }
    }
}
