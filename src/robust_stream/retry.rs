//! Reconnect loop driver.
//!
//! Runs a connection attempt until it succeeds or the backoff policy gives
//! up, reporting every decision to an observer along the way.

use std::future::Future;

use crate::robust_stream::{Backoff, BackoffDecision, Error, ReconnectObserver};

/// Drive `attempt` until it succeeds or `backoff` stops retrying.
///
/// After each failed attempt the driver consults the policy exactly once and
/// forwards the error together with the exact decision value to the
/// observer, then sleeps the returned delay before the next attempt. There
/// are no timers beyond that sleep; callers wanting a per-attempt deadline
/// wrap their future in [`tokio::time::timeout`] (the resulting `Elapsed`
/// converts into [`Error::Timeout`]).
///
/// # Errors
///
/// * [`Error::RetriesExhausted`] - the policy answered
///   [`BackoffDecision::Stop`]. The last transport error has already been
///   handed to the observer; no further attempts will be made.
pub async fn run_with_reconnect<T, F, Fut, B, O>(
    mut attempt: F,
    backoff: &mut B,
    observer: &mut O,
) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
    B: Backoff,
    O: ReconnectObserver,
{
    loop {
        let err = match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let decision = backoff.next_delay();
        observer.on_reconnect_attempt(&err, decision);

        match decision {
            BackoffDecision::Wait(delay) => {
                debug!(
                    delay_ms = delay.as_millis(),
                    error = %err,
                    "Connection attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
            }
            BackoffDecision::Stop => {
                error!(error = %err, "Connection attempts exhausted, giving up");
                return Err(Error::RetriesExhausted);
            }
        }
    }
}
