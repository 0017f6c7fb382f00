use std::time::Duration;

/// Delay between two polls of the same task.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Client-side request throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Tunables of the client that are not part of the connection itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fixed delay between task polls.
    pub poll_interval: Duration,
    /// Maximum total wait for one task; `None` waits indefinitely.
    pub poll_timeout: Option<Duration>,
    /// Optional request rate limit applied to every API call.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: None,
            rate_limit: None,
        }
    }
}
