pub mod backoff;
pub mod builder;
pub mod errors;
pub mod notify;
pub mod retry;

pub use backoff::{Backoff, BackoffDecision, STOP_SENTINEL, ThrottledBackoff};
pub use builder::{DEFAULT_MAX_RETRIES, DEFAULT_RECONNECT_INTERVAL, ReconnectConfig};
pub use errors::Error;
pub use notify::{CleanupHook, ReconnectObserver, Unsubscribe};
pub use retry::run_with_reconnect;
