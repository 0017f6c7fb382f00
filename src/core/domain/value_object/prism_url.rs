use crate::core::domain::{
    error::ValidationError,
    value_object::{prism_host::PrismHost, prism_port::PrismPort},
};

/// Path of the v2.0 REST gateway on a Prism Element cluster.
pub const PRISM_API_PATH: &str = "/PrismGateway/services/rest/v2.0";

/// The validated base URL every API path is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismUrl(String);

impl PrismUrl {
    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Builds the v2.0 gateway URL for a cluster endpoint.
    pub(crate) fn from_parts(
        host: &PrismHost,
        port: PrismPort,
        secure: bool,
    ) -> Result<Self, ValidationError> {
        let scheme = if secure { "https" } else { "http" };
        let url = format!(
            "{}://{}:{}{}",
            scheme,
            host.as_authority(),
            port.get(),
            PRISM_API_PATH
        );
        validate_url(&url)?;
        Ok(Self(url))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins an API path (which may carry a query string) onto the base URL.
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Validates a base URL: it must parse and use http or https.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    match parsed.scheme() {
        "https" | "http" => Ok(()),
        other => Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: https, http",
            other
        ))),
    }
}
