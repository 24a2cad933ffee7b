//! The node's active parameter set and whole-instance replacement.
//!
//! Readers call [`ActiveConfig::current`] to take an `Arc` snapshot and then
//! compute against it without holding any lock. Replacing the parameters
//! builds a new [`DposConfig`] (with an empty derived cache) and swaps the
//! pointer; a snapshot taken before the swap keeps its record and its cached
//! values for as long as the reader holds it.
//!
//! Ordering persistence calls relative to concurrent replacements is the
//! caller's job; this type only guarantees that readers never see a
//! half-replaced record.

use std::sync::{Arc, PoisonError, RwLock};

use dpos_store::KvStore;
use dpos_types::time::NANOS_PER_MILLI;
use dpos_types::{DposParams, InvalidConfiguration};

use crate::persistence::{self, display_key};
use crate::schedule::DposConfig;
use crate::DposError;

pub struct ActiveConfig {
    current: RwLock<Arc<DposConfig>>,
}

impl ActiveConfig {
    pub fn new(config: DposConfig) -> Self {
        log_activation(&config);
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Load the record stored under `key` at node startup.
    ///
    /// Any error is returned as-is; without parameters the node cannot run.
    pub fn load<S: KvStore + ?Sized>(store: &S, key: &[u8]) -> Result<Self, DposError> {
        let params = persistence::read_params(store, key)?;
        Ok(Self::new(DposConfig::new(params)?))
    }

    /// Like [`ActiveConfig::load`], but a store without a record is seeded
    /// with `genesis` first. Other failures are still returned.
    pub fn load_or_init<S: KvStore + ?Sized>(
        store: &S,
        key: &[u8],
        genesis: DposParams,
    ) -> Result<Self, DposError> {
        match Self::load(store, key) {
            Err(e) if e.is_not_found() => {
                tracing::info!(key = %display_key(key), "no dpos params stored, writing genesis params");
                let config = DposConfig::new(genesis)?;
                persistence::write_params(store, key, config.params())?;
                Ok(Self::new(config))
            }
            other => other,
        }
    }

    /// Snapshot of the active configuration.
    pub fn current(&self) -> Arc<DposConfig> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Validate `params` and make them active.
    pub fn activate(&self, params: DposParams) -> Result<Arc<DposConfig>, InvalidConfiguration> {
        let config = DposConfig::new(params)?;
        Ok(self.swap(config))
    }

    /// Re-read the record under `key` and make it active.
    ///
    /// On any failure the previous configuration stays active.
    pub fn reload<S: KvStore + ?Sized>(&self, store: &S, key: &[u8]) -> Result<Arc<DposConfig>, DposError> {
        let loaded = persistence::read_params(store, key)
            .map_err(DposError::from)
            .and_then(|params| DposConfig::new(params).map_err(DposError::from));
        match loaded {
            Ok(config) => Ok(self.swap(config)),
            Err(e) => {
                tracing::warn!(key = %display_key(key), error = %e, "dpos params reload rejected, keeping previous");
                Err(e)
            }
        }
    }

    /// Validate, persist under `key`, then make `params` active.
    ///
    /// Nothing is swapped unless the store accepted the write.
    pub fn persist_and_activate<S: KvStore + ?Sized>(
        &self,
        store: &S,
        key: &[u8],
        params: DposParams,
    ) -> Result<Arc<DposConfig>, DposError> {
        let config = DposConfig::new(params)?;
        persistence::write_params(store, key, config.params())?;
        Ok(self.swap(config))
    }

    fn swap(&self, config: DposConfig) -> Arc<DposConfig> {
        log_activation(&config);
        let config = Arc::new(config);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&config);
        config
    }
}

fn log_activation(config: &DposConfig) {
    let params = config.params();
    tracing::info!(
        block_interval_ms = params.block_interval_ms,
        block_frequency = params.block_frequency,
        producer_schedule_size = params.producer_schedule_size,
        epoch_interval_ms = config.epoch_interval() / NANOS_PER_MILLI,
        consensus_safe_size = config.consensus_safe_size(),
        "activated dpos params"
    );
}
