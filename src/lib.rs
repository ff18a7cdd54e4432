//! Kenyan Phone Fields - validation and normalization of Kenyan mobile numbers.
//!
//! This library checks numbers against Safaricom and Airtel Kenya prefix
//! tables or the generic Kenyan mobile format, and normalizes `+254…`,
//! `254…` and `0…` input into the canonical `254XXXXXXXXX` form.
//!
//! # Architecture
//!
//! - **domain**: Prefix tables, validation rules, normalizers and the phone value object
//! - **fields**: Field types binding a rule and normalizers for storage layers
//! - **error**: Configuration errors and per-field error collection
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod fields;

pub use config::Config;
pub use domain::{
    Carrier, FallbackPolicy, KenyanPhoneNumber, NormalizeOptions, PhoneRule,
    StorageNormalization, ValidationError,
};
pub use error::{ConfigError, FieldErrors};
pub use fields::{clean_record, FieldKind, PhoneField, PhoneNumberField};
