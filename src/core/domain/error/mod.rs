use std::time::Duration;
use thiserror::Error;

/// The main error type for Prism operations.
///
/// Job failures and missing containers are not represented here: they are
/// ordinary values returned by the client and the provisioning pipeline.
#[derive(Error, Debug)]
pub enum PrismError {
    /// Represents transport failures, non-success HTTP statuses and
    /// response bodies that could not be decoded
    ///
    /// # Fields
    /// * `0` - A description of what went wrong
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures (HTTP 401/403)
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Represents validation failures of client configuration
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    /// The server answered with a well-formed body that breaks the API contract
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A task did not reach 100% within the configured maximum wait
    #[error("Task {task_id} did not complete within {waited:?}")]
    Timeout { task_id: String, waited: Duration },
}

/// Specialized error type for validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    pub(crate) fn missing(field: &str) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: format!("{} is required", field),
        }
    }
}

/// Type alias for Results that may fail with a PrismError
pub type PrismResult<T> = Result<T, PrismError>;
