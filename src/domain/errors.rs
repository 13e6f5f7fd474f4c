//! Domain validation errors.

use std::fmt;

/// Errors that can occur during record field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided address is empty.
    EmptyAddress,

    /// The provided phone number is empty.
    EmptyPhone,

    /// The provided phone number does not match `###-###-####`.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::EmptyAddress => write!(f, "address cannot be empty"),
            Self::EmptyPhone => write!(f, "phone number cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "phone number must be in the format ###-###-####: {}",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
