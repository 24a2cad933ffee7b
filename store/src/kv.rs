//! Byte-oriented key-value storage trait.

use crate::StoreError;

/// Minimal get/put contract consumed by parameter persistence.
///
/// Implementations are shared across threads; both methods take `&self`.
pub trait KvStore {
    /// Retrieve the value stored under `key`.
    ///
    /// Returns [`StoreError::NotFound`] when the key was never written.
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// `Ok(())` means the write is durable as far as the backend can tell.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for std::sync::Arc<S> {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        (**self).put(key, value)
    }
}
