//! Reading and writing the parameter record through a [`KvStore`].
//!
//! These calls block on store I/O. Keep them off the timing paths; consensus
//! code reads from an in-memory [`DposConfig`](crate::DposConfig) instead.

use dpos_store::{KvStore, StoreError};
use dpos_types::{DecodeError, DposParams, EncodeError};
use thiserror::Error;

/// Well-known key for the node's parameter record.
pub const DPOS_PARAMS_KEY: &[u8] = b"dpos_params";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("no dpos params stored under key {key}")]
    NotFound { key: String },

    #[error("store failure for dpos params under key {key}: {source}")]
    Store {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to decode dpos params under key {key} ({len} bytes): {source}")]
    Decode {
        key: String,
        len: usize,
        #[source]
        source: DecodeError,
    },

    #[error("failed to encode dpos params: {0}")]
    Encode(#[from] EncodeError),
}

impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound { .. })
    }
}

/// Encode `params` and store them under `key`.
pub fn write_params<S: KvStore + ?Sized>(
    store: &S,
    key: &[u8],
    params: &DposParams,
) -> Result<(), PersistenceError> {
    let data = params.encode()?;
    store.put(key, &data).map_err(|source| PersistenceError::Store {
        key: display_key(key),
        source,
    })?;
    tracing::debug!(key = %display_key(key), len = data.len(), "wrote dpos params");
    Ok(())
}

/// Load and decode the record stored under `key`.
///
/// A key that was never written is reported as [`PersistenceError::NotFound`].
pub fn read_params<S: KvStore + ?Sized>(store: &S, key: &[u8]) -> Result<DposParams, PersistenceError> {
    let data = store.get(key).map_err(|err| match err {
        StoreError::NotFound(_) => PersistenceError::NotFound {
            key: display_key(key),
        },
        source => PersistenceError::Store {
            key: display_key(key),
            source,
        },
    })?;
    let params = DposParams::decode(&data).map_err(|source| PersistenceError::Decode {
        key: display_key(key),
        len: data.len(),
        source,
    })?;
    tracing::debug!(key = %display_key(key), len = data.len(), "read dpos params");
    Ok(params)
}

/// Render a key for messages: as text when printable ASCII, otherwise hex.
pub(crate) fn display_key(key: &[u8]) -> String {
    if !key.is_empty() && key.iter().all(|b| b.is_ascii_graphic()) {
        String::from_utf8_lossy(key).into_owned()
    } else {
        format!("0x{}", hex::encode(key))
    }
}
