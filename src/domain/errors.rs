//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(phone) => write!(
                f,
                "Phone number {} should contain exactly 10 digits.",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty."
        );
        assert_eq!(
            ValidationError::InvalidPhone("12345".to_string()).to_string(),
            "Phone number 12345 should contain exactly 10 digits."
        );
    }
}
