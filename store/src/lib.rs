//! Abstract storage contract.
//!
//! Every storage backend (LMDB, in-memory for testing) implements [`KvStore`].
//! The rest of the codebase depends only on the trait.

pub mod error;
pub mod kv;

pub use error::StoreError;
pub use kv::KvStore;
