//! Error types surfaced while maintaining an event stream subscription.
//!
//! The reconnect decision layer itself cannot fail: backoff decisions and
//! observer notifications are total functions over their inputs. The type
//! here carries the *collaborator's* failures - whatever the transport layer
//! reported for a failed attempt - plus the one terminal error the reconnect
//! driver produces when the policy gives up.

use std::sync::Arc;

use thiserror::Error;

/// Errors reported by connection attempts and the reconnect driver.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The connection attempt exceeded its deadline.
    #[error("Connection attempt timed out")]
    Timeout,

    /// Opaque failure reported by the transport layer.
    ///
    /// Carried as diagnostic context only: reconnect decisions never inspect
    /// the payload's type or message.
    #[error("Transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote end closed the event stream.
    #[error("Event stream closed")]
    Closed,

    /// The backoff policy gave up on reconnecting.
    ///
    /// Terminal: no further attempts will be made and resources tied to the
    /// subscription should be released.
    #[error("Reconnect attempts exhausted")]
    RetriesExhausted,
}

impl Error {
    /// Wrap an arbitrary transport-layer error.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport(Arc::new(err))
    }
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Error::Timeout
    }
}
