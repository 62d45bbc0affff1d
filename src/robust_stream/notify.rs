//! Reconnect notification hook and permanent-stop cleanup.
//!
//! The reconnect loop reports every backoff decision to an observer. Most
//! decisions need no reaction; the one that does is
//! [`BackoffDecision::Stop`], after which no more events will ever arrive
//! and everything tied to the subscription has to be released.

use tokio_util::sync::CancellationToken;

use crate::robust_stream::{BackoffDecision, Error};

/// Hook invoked by the reconnect loop after every failed attempt.
///
/// The hook fires on the *backoff decision*, not on the connection result:
/// the loop passes the error from the failed attempt together with the exact
/// decision the policy produced for it. Implementations must not fail.
pub trait ReconnectObserver {
    /// Observe one reconnect attempt.
    ///
    /// `error` is diagnostic context forwarded from the transport layer;
    /// implementations are expected to act on `decision` only.
    fn on_reconnect_attempt(&mut self, error: &Error, decision: BackoffDecision);
}

impl<F> ReconnectObserver for F
where
    F: FnMut(&Error, BackoffDecision),
{
    fn on_reconnect_attempt(&mut self, error: &Error, decision: BackoffDecision) {
        self(error, decision);
    }
}

/// Deregistration seam into the subscriber registry owned by the streaming
/// client.
///
/// The registry itself lives outside this crate; implementations only need
/// to remove one subscription from it. Deregistering must be idempotent and
/// infallible: removing an already-removed subscriber is a no-op.
pub trait Unsubscribe {
    /// Remove the associated event channel from the subscriber set.
    fn unsubscribe(&self);
}

impl<F> Unsubscribe for F
where
    F: Fn(),
{
    fn unsubscribe(&self) {
        self();
    }
}

/// Observer that tears down a subscription once the backoff policy has
/// permanently given up.
///
/// The hook closes over two borrowed handles injected at construction time:
/// the deregistration handle for the event channel and the cancellation
/// token of the owning work unit. It never constructs or destroys either
/// collaborator; on [`BackoffDecision::Stop`] it deregisters the channel and
/// cancels the token, signalling downstream consumers that no more events
/// will arrive.
///
/// Cleanup runs at most once. [`CancellationToken::cancel`] is itself a
/// one-shot broadcast, and the hook additionally guards the deregistration
/// path, so delivering the terminal decision twice leaves the same end state
/// as delivering it once.
pub struct CleanupHook<U> {
    subscription: U,
    cancel: CancellationToken,
    done: bool,
}

impl<U: Unsubscribe> CleanupHook<U> {
    /// Create a hook that deregisters `subscription` and cancels `cancel`
    /// when the policy gives up.
    #[must_use]
    pub fn new(subscription: U, cancel: CancellationToken) -> Self {
        Self { subscription, cancel, done: false }
    }

    /// Whether the terminal cleanup has already run.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<U: Unsubscribe> ReconnectObserver for CleanupHook<U> {
    fn on_reconnect_attempt(&mut self, error: &Error, decision: BackoffDecision) {
        if !decision.is_stop() {
            return;
        }

        if self.done {
            trace!("Subscription already torn down, ignoring repeated stop");
            return;
        }
        self.done = true;

        warn!(error = %error, "Reconnect backoff exhausted, tearing down subscription");
        // ignore unused var warning when tracing disabled
        _ = error;

        self.subscription.unsubscribe();
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn counting_unsubscribe() -> (impl Fn() + Clone, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        (move || _ = counter.fetch_add(1, Ordering::SeqCst), count)
    }

    #[test]
    fn stop_triggers_cleanup_exactly_once() {
        let (unsubscribe, count) = counting_unsubscribe();
        let cancel = CancellationToken::new();
        let mut hook = CleanupHook::new(unsubscribe, cancel.clone());

        hook.on_reconnect_attempt(&Error::Closed, BackoffDecision::Stop);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(cancel.is_cancelled());
        assert!(hook.is_done());

        // A second delivery of the terminal decision is a no-op.
        hook.on_reconnect_attempt(&Error::Closed, BackoffDecision::Stop);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn wait_decisions_are_ignored() {
        let (unsubscribe, count) = counting_unsubscribe();
        let cancel = CancellationToken::new();
        let mut hook = CleanupHook::new(unsubscribe, cancel.clone());

        let wait = BackoffDecision::Wait(std::time::Duration::from_millis(100));
        hook.on_reconnect_attempt(&Error::Timeout, wait);
        hook.on_reconnect_attempt(&Error::Closed, wait);

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!cancel.is_cancelled());
        assert!(!hook.is_done());
    }

    #[test]
    fn cancelling_an_already_cancelled_token_is_a_no_op() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        cancel.cancel();
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        let mut observer = |_: &Error, decision: BackoffDecision| seen.push(decision);

        observer.on_reconnect_attempt(&Error::Timeout, BackoffDecision::Stop);

        assert_eq!(seen, vec![BackoffDecision::Stop]);
    }
}
