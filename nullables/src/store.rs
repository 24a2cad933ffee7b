//! Nullable store — thread-safe in-memory key-value storage for testing.

use dpos_store::{KvStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// An in-memory [`KvStore`] for testing.
///
/// Reads and writes can be made to fail on demand to exercise error paths.
pub struct NullKvStore {
    entries: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicU64,
}

impl NullKvStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            writes: AtomicU64::new(0),
        }
    }

    /// Make every subsequent `get` return a backend error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `put` return a backend error without storing.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Store bytes directly, bypassing failure injection (e.g. corrupt records).
    pub fn insert_raw(&self, key: &[u8], value: Vec<u8>) {
        self.entries.lock().unwrap().insert(key.to_vec(), value);
    }

    /// Number of successful `put` calls.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Default for NullKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for NullKvStore {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected read failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(String::from_utf8_lossy(key).into_owned()))
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected write failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
