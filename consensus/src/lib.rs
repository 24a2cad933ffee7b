//! DPoS schedule — the timing and quorum constants every node must agree on.
//!
//! The consensus engine treats this crate as a read-only oracle: given the
//! active parameter record it answers which slot a timestamp belongs to,
//! which epoch, which producer's turn it is, how large a quorum must be, and
//! what a block is worth in base units.
//!
//! ## Module overview
//!
//! - [`schedule`] — [`DposConfig`]: a validated record plus lazily derived values.
//! - [`timing`] — slot, next slot, epoch and producer offset for a timestamp.
//! - [`persistence`] — read/write of the canonical record through a `KvStore`.
//! - [`active`] — the node's current configuration and whole-instance replacement.
//! - [`error`] — error types.

pub mod active;
pub mod error;
pub mod persistence;
pub mod schedule;
pub mod timing;

pub use active::ActiveConfig;
pub use error::DposError;
pub use persistence::{read_params, write_params, PersistenceError, DPOS_PARAMS_KEY};
pub use schedule::DposConfig;
