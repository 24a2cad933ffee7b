//! Nullable clock — deterministic time for testing.

use dpos_types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to. Safe to share between threads.
pub struct NullClock {
    current: AtomicU64,
}

impl NullClock {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            current: AtomicU64::new(initial.as_nanos()),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::from_nanos(self.current.load(Ordering::SeqCst))
    }

    /// Advance time by a number of milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.current
            .fetch_add(Timestamp::from_millis(millis).as_nanos(), Ordering::SeqCst);
    }

    /// Set the time to a specific value.
    pub fn set(&self, at: Timestamp) {
        self.current.store(at.as_nanos(), Ordering::SeqCst);
    }
}

impl Default for NullClock {
    fn default() -> Self {
        Self::new(Timestamp::EPOCH)
    }
}
