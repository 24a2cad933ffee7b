//! Slot, epoch and producer-offset arithmetic.
//!
//! Pure functions of a timestamp and a [`DposConfig`]. All divisions are
//! integer floor divisions over nanoseconds; divisors are non-zero because a
//! `DposConfig` only exists for a validated record. Additions saturate at
//! `u64::MAX`, so every function is total.

use dpos_types::Timestamp;

use crate::schedule::DposConfig;

impl DposConfig {
    /// Round `at` to its block boundary.
    ///
    /// A timestamp up to one tenth of an interval before a boundary rounds
    /// forward to it, absorbing clock skew between producer and validator.
    pub fn slot(&self, at: Timestamp) -> Timestamp {
        let interval = self.block_interval();
        let shifted = at.as_nanos().saturating_add(interval / 10);
        Timestamp::from_nanos(shifted / interval * interval)
    }

    /// The block boundary after [`DposConfig::slot`].
    ///
    /// Saturates at `u64::MAX` when that boundary is not representable, so
    /// within one interval of the top of the range the result is off-grid.
    pub fn next_slot(&self, at: Timestamp) -> Timestamp {
        let next = self
            .slot(at)
            .as_nanos()
            .saturating_add(self.block_interval());
        Timestamp::from_nanos(next)
    }

    /// Index of the epoch containing `at`.
    pub fn epoch(&self, at: Timestamp) -> u64 {
        at.as_nanos() / self.epoch_interval()
    }

    /// Position in the producer schedule whose turn covers `at`.
    ///
    /// Always less than `producer_schedule_size`.
    pub fn offset(&self, at: Timestamp) -> u64 {
        let turn = self.block_interval() * self.params().block_frequency;
        (at.as_nanos() % self.epoch_interval()) / turn
    }

    /// First nanosecond of `epoch`.
    pub fn epoch_start(&self, epoch: u64) -> Timestamp {
        Timestamp::from_nanos(epoch.saturating_mul(self.epoch_interval()))
    }
}
