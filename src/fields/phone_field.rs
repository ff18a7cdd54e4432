//! The one parameterized phone field behind all three field kinds.

use super::traits::PhoneField;
use crate::domain::{
    to_canonical, to_canonical_lenient_plus, Carrier, NormalizeOptions, PhoneRule,
    StorageNormalization, ValidationError,
};

/// `254` plus nine subscriber digits.
pub const CARRIER_MAX_LENGTH: usize = 12;

/// Room for one extra digit on generic numbers.
pub const KENYAN_MAX_LENGTH: usize = 13;

/// Which numbers a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Numbers in one carrier's ranges only.
    Carrier(Carrier),
    /// Any `07…` or `01…` mobile number.
    KenyanMobile,
}

impl FieldKind {
    /// Validation rule for this kind.
    pub fn rule(self) -> PhoneRule {
        match self {
            FieldKind::Carrier(Carrier::Safaricom) => PhoneRule::safaricom(),
            FieldKind::Carrier(Carrier::Airtel) => PhoneRule::airtel(),
            FieldKind::KenyanMobile => PhoneRule::kenyan_mobile(),
        }
    }

    /// Column width in characters.
    pub fn max_length(self) -> usize {
        match self {
            FieldKind::Carrier(_) => CARRIER_MAX_LENGTH,
            FieldKind::KenyanMobile => KENYAN_MAX_LENGTH,
        }
    }
}

/// A phone field configured by kind and normalizer options.
///
/// # Example
///
/// ```
/// use kenyan_phone_fields::fields::{PhoneField, PhoneNumberField};
///
/// let field = PhoneNumberField::safaricom("mpesa_number");
/// assert_eq!(field.clean(Some("0712345678")), Ok(Some("254712345678".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberField {
    name: String,
    kind: FieldKind,
    options: NormalizeOptions,
}

impl PhoneNumberField {
    /// Field of `kind` with default normalizer options.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            options: NormalizeOptions::default(),
        }
    }

    /// Field accepting Safaricom numbers only.
    pub fn safaricom(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Carrier(Carrier::Safaricom))
    }

    /// Field accepting Airtel Kenya numbers only.
    pub fn airtel(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Carrier(Carrier::Airtel))
    }

    /// Field accepting any Kenyan mobile number.
    pub fn kenyan(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::KenyanMobile)
    }

    /// Replace the normalizer options.
    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Which numbers this field accepts.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

impl PhoneField for PhoneNumberField {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_length(&self) -> usize {
        self.kind.max_length()
    }

    fn to_logical(&self, value: Option<&str>) -> Option<String> {
        let value = value?;
        Some(match self.kind {
            FieldKind::Carrier(_) => to_canonical(value, self.options),
            FieldKind::KenyanMobile => to_canonical_lenient_plus(value, self.options),
        })
    }

    fn to_storage(&self, value: Option<&str>) -> Option<String> {
        let value = value?;
        Some(match (self.kind, self.options.storage) {
            (FieldKind::KenyanMobile, StorageNormalization::Unified) => {
                to_canonical_lenient_plus(value, self.options)
            }
            _ => to_canonical(value, self.options),
        })
    }

    fn run_validators(&self, value: Option<&str>) -> Result<(), ValidationError> {
        self.kind.rule().validate(value)
    }
}
