//! Domain types for Kenyan mobile numbers.
//!
//! This module holds the carrier prefix tables, the validation rules built
//! on them, the normalizers that produce the canonical `254XXXXXXXXX` form,
//! and a validated phone number value object.

pub mod carrier;
pub mod errors;
pub mod normalize;
pub mod phone;
pub mod prefixes;
pub mod rules;

pub use carrier::Carrier;
pub use errors::ValidationError;
pub use normalize::{
    strip_country_code, to_canonical, to_canonical_lenient_plus, FallbackPolicy,
    NormalizeOptions, StorageNormalization,
};
pub use phone::KenyanPhoneNumber;
pub use rules::PhoneRule;
