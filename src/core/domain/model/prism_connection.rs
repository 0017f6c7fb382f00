use crate::core::domain::value_object::{
    PrismHost, PrismPassword, PrismPort, PrismUrl, PrismUsername,
};

/// Endpoint and credentials of one Prism Element cluster.
///
/// Read-only once built; the HTTP session is derived from it.
#[derive(Debug, Clone)]
pub struct PrismConnection {
    prism_host: PrismHost,
    prism_port: PrismPort,
    prism_username: PrismUsername,
    prism_password: PrismPassword,
    prism_secure: bool,
    accept_invalid_certs: bool,
    prism_url: PrismUrl,
}

impl PrismConnection {
    pub fn new(
        prism_host: PrismHost,
        prism_port: PrismPort,
        prism_username: PrismUsername,
        prism_password: PrismPassword,
        prism_secure: bool,
        accept_invalid_certs: bool,
        prism_url: PrismUrl,
    ) -> Self {
        Self {
            prism_host,
            prism_port,
            prism_username,
            prism_password,
            prism_secure,
            accept_invalid_certs,
            prism_url,
        }
    }

    pub fn prism_host(&self) -> &PrismHost {
        &self.prism_host
    }

    pub fn prism_port(&self) -> PrismPort {
        self.prism_port
    }

    pub fn prism_username(&self) -> &PrismUsername {
        &self.prism_username
    }

    pub fn prism_password(&self) -> &PrismPassword {
        &self.prism_password
    }

    pub fn is_connection_secure(&self) -> bool {
        self.prism_secure
    }

    /// Whether TLS certificate validation is skipped (self-signed cluster certs).
    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn prism_url(&self) -> &PrismUrl {
        &self.prism_url
    }
}
