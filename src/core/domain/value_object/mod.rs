mod prism_host;
mod prism_password;
mod prism_port;
mod prism_url;
mod prism_username;

pub use prism_host::PrismHost;
pub use prism_password::PrismPassword;
pub use prism_port::{DEFAULT_PRISM_PORT, PrismPort};
pub use prism_url::{PRISM_API_PATH, PrismUrl};
pub use prism_username::PrismUsername;

// Re-export validation functions for internal use
pub(crate) use prism_host::validate_host;
pub(crate) use prism_password::validate_password;
pub(crate) use prism_port::validate_port;
pub(crate) use prism_username::validate_username;
