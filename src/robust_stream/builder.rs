use std::time::Duration;

use crate::robust_stream::ThrottledBackoff;

/// Default minimum time between tolerated disconnects.
pub const DEFAULT_RECONNECT_INTERVAL: Duration = Duration::from_millis(100);
/// Default number of within-interval disconnects tolerated before giving up.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Builder for the reconnect policy installed into a streaming client.
///
/// Use this to configure the throttle interval and the burst limit. Both
/// parameters are fixed once [`build`](Self::build) has run; the resulting
/// policy is owned by the client for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    interval: Duration,
    max_retries: u32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconnectConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { interval: DEFAULT_RECONNECT_INTERVAL, max_retries: DEFAULT_MAX_RETRIES }
    }

    /// Set the minimum time between tolerated disconnects.
    ///
    /// This is also the fixed delay returned for every tolerated retry.
    /// Default is [`DEFAULT_RECONNECT_INTERVAL`].
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the number of within-interval disconnects tolerated before the
    /// policy gives up.
    ///
    /// Must be positive; zero is clamped to one at build time. Default is
    /// [`DEFAULT_MAX_RETRIES`].
    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Build the policy.
    ///
    /// Final builder method: consumes the configuration and returns the
    /// [`ThrottledBackoff`] to hand to the reconnect loop.
    #[must_use]
    pub fn build(self) -> ThrottledBackoff {
        debug!(
            interval_ms = self.interval.as_millis(),
            max_retries = self.max_retries,
            "Building reconnect policy"
        );

        ThrottledBackoff::new(self.interval, self.max_retries)
    }
}
