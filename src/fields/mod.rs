//! Phone number field types for storage layers.
//!
//! A field binds a validation rule and a pair of normalizers behind the
//! narrow [`PhoneField`] interface: value in, value out, and a validation hook.

pub mod phone_field;
pub mod record;
pub mod traits;

pub use phone_field::{FieldKind, PhoneNumberField, CARRIER_MAX_LENGTH, KENYAN_MAX_LENGTH};
pub use record::clean_record;
pub use traits::PhoneField;
