use crate::core::domain::error::ValidationError;

/// A Prism username, local (`admin`) or directory-qualified (`user@corp.local`).
#[derive(Debug, Clone)]
pub struct PrismUsername(String);

impl PrismUsername {
    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a username.
///
/// Basic auth sends `user:password`, so a colon in the username cannot
/// be represented.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.contains(':') {
        return Err(ValidationError::Format(
            "Username cannot contain ':'".to_string(),
        ));
    }
    Ok(())
}
