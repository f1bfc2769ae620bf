//! Gateway configuration.

use std::time::Duration;

/// Configuration for a [`crate::Gateway`].
///
/// ```rust
/// use std::time::Duration;
/// use prism_client::GatewayConfig;
///
/// let config = GatewayConfig::default()
///     .call_timeout(Some(Duration::from_secs(30)))
///     .log_unexpected(false);
/// ```
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// How long a call waits for its response slot to be filled.
    ///
    /// `None` waits forever; the caller can still cancel by dropping the
    /// call's future.
    pub call_timeout: Option<Duration>,
    /// Log failures that operations without an error return swallow, at
    /// `warn` instead of `debug`.
    pub log_unexpected: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            call_timeout:   None,
            log_unexpected: true,
        }
    }
}

impl GatewayConfig {
    pub fn call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout; self
    }

    pub fn log_unexpected(mut self, v: bool) -> Self {
        self.log_unexpected = v; self
    }
}
