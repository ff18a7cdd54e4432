//! Phone number validation errors.

use thiserror::Error;

/// Errors raised while validating a phone number.
///
/// Messages name the offending value and the rule it broke, so they can be
/// shown to end users as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value object was built from a blank string.
    #[error("phone number cannot be empty")]
    Empty,

    /// The number does not start with any prefix of the carrier's table.
    #[error("{value} is not a valid {carrier} prefix.")]
    InvalidPrefix { value: String, carrier: &'static str },

    /// The number has the wrong digit count once the country code is gone.
    #[error("{value} must be {expected} digits long after removing country code.")]
    InvalidLength { value: String, expected: usize },

    /// The number does not match the generic Kenyan mobile format.
    #[error("{0} is not a valid Kenyan mobile number format.")]
    InvalidFormat(String),

    /// The value is longer than the field can store.
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    TooLong { max: usize, actual: usize },
}
