//! LMDB implementation of KvStore.

use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env};

use dpos_store::{KvStore, StoreError};

use crate::environment::DEFAULT_MAP_SIZE;
use crate::{LmdbEnvironment, LmdbError};

const KV_DB_NAME: &str = "dpos_kv";

pub struct LmdbKvStore {
    pub(crate) env: Arc<Env>,
    pub(crate) kv_db: Database<Bytes, Bytes>,
}

impl LmdbKvStore {
    /// Open (creating if needed) the key-value database in `environment`.
    pub fn new(environment: &LmdbEnvironment) -> Result<Self, LmdbError> {
        let env = Arc::clone(&environment.env);
        let mut wtxn = env.write_txn()?;
        let kv_db = env.create_database::<Bytes, Bytes>(&mut wtxn, Some(KV_DB_NAME))?;
        wtxn.commit()?;
        Ok(Self { env, kv_db })
    }

    /// Open an environment at `path` with default sizing and return its store.
    pub fn open(path: &Path) -> Result<Self, LmdbError> {
        let environment = LmdbEnvironment::open(path, 1, DEFAULT_MAP_SIZE)?;
        Self::new(&environment)
    }
}

impl KvStore for LmdbKvStore {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let val = self
            .kv_db
            .get(&rtxn, key)
            .map_err(LmdbError::from)?
            .ok_or_else(|| StoreError::NotFound(String::from_utf8_lossy(key).into_owned()))?;
        Ok(val.to_vec())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.kv_db
            .put(&mut wtxn, key, value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LmdbKvStore::open(dir.path()).unwrap();
        store.put(b"dpos_params", b"\x01\x02\x03").unwrap();
        assert_eq!(store.get(b"dpos_params").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn missing_key_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LmdbKvStore::open(dir.path()).unwrap();
        assert!(matches!(store.get(b"absent"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = LmdbKvStore::open(dir.path()).unwrap();
            store.put(b"k", b"persisted").unwrap();
        }
        let store = LmdbKvStore::open(dir.path()).unwrap();
        assert_eq!(store.get(b"k").unwrap(), b"persisted");
    }
}
