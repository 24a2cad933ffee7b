//! LMDB storage backend.
//!
//! Implements [`dpos_store::KvStore`] using the `heed` LMDB bindings. All keys
//! live in a single named database inside one environment.

pub mod environment;
pub mod error;
pub mod kv;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use kv::LmdbKvStore;
