use crate::core::domain::error::ValidationError;
use std::fmt;

/// A Prism password (plaintext, only held for the lifetime of the session).
#[derive(Clone)]
pub struct PrismPassword(String);

impl PrismPassword {
    /// Creates a new password without validation.
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(password)
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrismPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrismPassword(****)")
    }
}

/// Validates a password. Strength is the cluster's concern, only presence is checked.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
