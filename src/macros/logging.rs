//! Logging macros forwarding to `tracing` under the `tracing` feature.
//!
//! With the feature disabled every log site compiles away entirely, so
//! clients that don't want observability pay nothing for it.

macro_rules! error {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::error!(target: "robust_stream", $($arg)*)
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "robust_stream", $($arg)*)
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "robust_stream", $($arg)*)
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "robust_stream", $($arg)*)
    };
}
