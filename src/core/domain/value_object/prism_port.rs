use crate::core::domain::error::ValidationError;

/// Port Prism Element serves its REST gateway on.
pub const DEFAULT_PRISM_PORT: u16 = 9440;

/// A validated Prism port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrismPort(u16);

impl PrismPort {
    /// Creates a new port without validation.
    pub(crate) fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl Default for PrismPort {
    fn default() -> Self {
        Self(DEFAULT_PRISM_PORT)
    }
}

/// Validates a port number.
pub(crate) fn validate_port(port: u16) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::Field {
            field: "port".to_string(),
            message: "Port cannot be 0".to_string(),
        });
    }
    Ok(())
}
