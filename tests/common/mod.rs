//! Common test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use robust_stream::{Error, Unsubscribe};

/// Throttle interval used by reconnect tests.
pub const TEST_INTERVAL: Duration = Duration::from_millis(100);

/// Burst limit used by reconnect tests.
pub const TEST_MAX_RETRIES: u32 = 2;

/// Subscriber-registry double that counts deregistrations.
#[derive(Clone, Default)]
pub struct CountingRegistry {
    removed: Arc<AtomicUsize>,
}

impl CountingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the subscription has been deregistered.
    pub fn removed(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }
}

impl Unsubscribe for CountingRegistry {
    fn unsubscribe(&self) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}

/// A transport error of the kind the connection layer would report.
pub fn transport_error() -> Error {
    Error::transport(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer"))
}
