//! Configuration errors raised where a parameter record is activated.

use thiserror::Error;

/// A parameter record that cannot drive the schedule arithmetic.
///
/// Records are never rejected on construction or decode; this is produced by
/// [`DposParams::validate`](crate::DposParams::validate), which must pass
/// before a record is put into service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("invalid configuration: {field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("invalid configuration: decimals {decimals} exceeds the maximum of {max}")]
    DecimalsOutOfRange { decimals: u64, max: u64 },

    #[error("invalid configuration: {what} overflows a 64-bit nanosecond interval")]
    IntervalOverflow { what: &'static str },
}
