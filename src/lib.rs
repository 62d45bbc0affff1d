//! Reconnection control for long-lived event stream subscriptions.
//!
//! When a persistent subscription (for example a server-sent event stream
//! held open over HTTP) loses its connection, the reconnect loop has to
//! decide how long to wait before dialing again, and when to give up
//! entirely. This crate provides that decision layer:
//!
//! * [`ThrottledBackoff`] - a backoff policy that bounds retry *frequency*
//!   rather than retry count. Occasional drops are tolerated indefinitely;
//!   only bursts of failures clustered within one interval count toward the
//!   give-up limit.
//! * [`CleanupHook`] - an observer invoked after each reconnect attempt that
//!   tears down the subscription (deregistration plus cancellation) once the
//!   policy has permanently given up.
//! * [`run_with_reconnect`] - a generic driver that wires a connection
//!   attempt, a [`Backoff`] policy, and a [`ReconnectObserver`] together.
//!
//! The transport itself, event parsing, and subscriber bookkeeping are owned
//! by the surrounding client; this crate only calls into them through the
//! [`Unsubscribe`] seam and a [`CancellationToken`].
//!
//! # Example
//!
//! ```rust,ignore
//! use robust_stream::{CleanupHook, ReconnectConfig, run_with_reconnect};
//! use tokio_util::sync::CancellationToken;
//!
//! let mut backoff = ReconnectConfig::new()
//!     .interval(Duration::from_millis(100))
//!     .max_retries(2)
//!     .build();
//!
//! let cancel = CancellationToken::new();
//! let mut hook = CleanupHook::new(move || client.unsubscribe(&events), cancel.clone());
//!
//! let stream = run_with_reconnect(|| client.connect(), &mut backoff, &mut hook).await?;
//! ```
//!
//! # Feature Flags
//!
//! * `tracing` - emit structured logs through the `tracing` crate. When
//!   disabled, all log sites compile to no-ops.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

#[macro_use]
mod macros;

pub mod robust_stream;

pub use robust_stream::*;
