//! Fundamental types for DPoS consensus parameters.
//!
//! This crate defines the raw parameter record shared by every other crate in
//! the workspace, the amount and timestamp types it is built from, and the
//! canonical binary codec used to persist it.

pub mod amount;
pub mod codec;
pub mod error;
pub mod params;
pub mod time;

pub use amount::Amount;
pub use codec::{DecodeError, EncodeError};
pub use error::InvalidConfiguration;
pub use params::DposParams;
pub use time::Timestamp;
