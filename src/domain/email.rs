//! Email address value object.
//!
//! DDD: Value object - immutable, compared by value.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{DomainError, DomainResult};

/// Accepted address shape: local part, `@`, dotted domain, alphabetic TLD
/// of at least two characters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Email address value object.
///
/// Construction validates the format; a stored `EmailAddress` is always
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap a raw email string.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidEmail` if the string is empty or does
    /// not match the accepted format.
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let value = raw.into();

        if value.is_empty() {
            return Err(DomainError::InvalidEmail(
                "Email cannot be empty".to_string(),
            ));
        }
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(DomainError::InvalidEmail(format!(
                "Invalid email format: {}",
                value
            )));
        }

        Ok(Self(value))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the wrapped string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
