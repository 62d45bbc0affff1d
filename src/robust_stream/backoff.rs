//! Throttled backoff policy for reconnecting event stream subscriptions.
//!
//! Naive exponential backoff punishes transient blips, and plain retry-count
//! limits punish long-lived connections that occasionally drop. The policy
//! here penalizes only *bursts*: disconnects arriving faster than the
//! configured interval count toward a limit, while a connection that survives
//! at least one full interval between drops is treated as healthy
//! indefinitely.

use std::time::Duration;

use tokio::time::Instant;

/// Distinguished duration value meaning "stop retrying".
///
/// The decision enum is the primary contract; this sentinel exists for
/// callers that exchange plain durations and detect the terminal decision by
/// equality comparison. [`BackoffDecision::as_duration`] and
/// [`BackoffDecision::from_duration`] convert between the two styles.
pub const STOP_SENTINEL: Duration = Duration::MAX;

/// Decision produced by a [`Backoff`] policy after a failed connection
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffDecision {
    /// Sleep for the given duration, then attempt to reconnect.
    Wait(Duration),
    /// Give up permanently. The caller must not attempt further reconnects
    /// and should release all resources tied to the subscription.
    Stop,
}

impl BackoffDecision {
    /// Flatten the decision into a plain duration, mapping [`Stop`] to
    /// [`STOP_SENTINEL`].
    ///
    /// [`Stop`]: BackoffDecision::Stop
    #[must_use]
    pub fn as_duration(self) -> Duration {
        match self {
            BackoffDecision::Wait(duration) => duration,
            BackoffDecision::Stop => STOP_SENTINEL,
        }
    }

    /// Recover a decision from a plain duration produced by
    /// [`as_duration`](Self::as_duration).
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        if duration == STOP_SENTINEL {
            BackoffDecision::Stop
        } else {
            BackoffDecision::Wait(duration)
        }
    }

    /// Returns `true` for the terminal [`Stop`](BackoffDecision::Stop)
    /// decision.
    #[must_use]
    pub fn is_stop(self) -> bool {
        matches!(self, BackoffDecision::Stop)
    }
}

/// Reconnect delay strategy consulted by the reconnect loop.
///
/// The loop must call [`next_delay`](Backoff::next_delay) exactly once per
/// failed attempt, in strictly increasing time order, and either sleep the
/// returned duration or halt retrying on [`BackoffDecision::Stop`].
pub trait Backoff {
    /// Decide whether to allow another reconnect attempt and, if so, how
    /// long to wait before it.
    fn next_delay(&mut self) -> BackoffDecision;

    /// Clear retry accounting, restoring the state the policy had when it
    /// was constructed.
    fn reset(&mut self);
}

/// Backoff policy that throttles reconnect frequency over time.
///
/// Every tolerated retry waits exactly the configured interval; the policy
/// never backs off further than that. What it limits instead is flapping:
/// each disconnect arriving less than one interval after the previous one
/// increments a burst counter, and once the counter reaches `max_retries`
/// the policy answers [`BackoffDecision::Stop`]. A disconnect arriving a
/// full interval (or more) after the previous one resets the counter, so a
/// connection that drops occasionally retries forever.
///
/// The first decision after construction (or after
/// [`reset`](Backoff::reset)) measures elapsed time against the
/// construction/reset instant, so a disconnect within one interval of
/// construction already counts toward the burst limit.
#[derive(Debug, Clone)]
pub struct ThrottledBackoff {
    interval: Duration,
    max_retries: u32,
    retries: u32,
    last_interrupt: Instant,
}

impl ThrottledBackoff {
    /// Create a new policy.
    ///
    /// `interval` is the minimum time between disconnects for the connection
    /// to be considered healthy, and also the fixed delay returned for every
    /// tolerated retry. `max_retries` is the number of within-interval
    /// disconnects tolerated before giving up; a value of zero is treated
    /// as one.
    #[must_use]
    pub fn new(interval: Duration, max_retries: u32) -> Self {
        Self {
            interval,
            max_retries: max_retries.max(1),
            retries: 0,
            last_interrupt: Instant::now(),
        }
    }

    /// The configured minimum time between tolerated disconnects.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The configured burst limit.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Number of within-interval disconnects observed since the last slow
    /// disconnect or reset. Diagnostic only.
    #[must_use]
    pub fn retries(&self) -> u32 {
        self.retries
    }
}

impl Backoff for ThrottledBackoff {
    fn next_delay(&mut self) -> BackoffDecision {
        let now = Instant::now();

        if now.duration_since(self.last_interrupt) >= self.interval {
            // Slow disconnect: the connection survived at least one full
            // interval, so the burst history is forgotten.
            self.last_interrupt = now;
            self.retries = 0;
            return BackoffDecision::Wait(self.interval);
        }

        // Counter saturates at the limit so repeated fast failures keep
        // answering Stop until reset.
        self.retries = (self.retries + 1).min(self.max_retries);
        if self.retries >= self.max_retries {
            trace!(
                retries = self.retries,
                max_retries = self.max_retries,
                "Fast disconnect limit reached"
            );
            // The terminal decision does not advance the interrupt stamp.
            return BackoffDecision::Stop;
        }

        trace!(
            retries = self.retries,
            max_retries = self.max_retries,
            "Fast disconnect tolerated"
        );
        self.last_interrupt = now;
        BackoffDecision::Wait(self.interval)
    }

    fn reset(&mut self) {
        self.retries = 0;
        self.last_interrupt = Instant::now();
    }
}
