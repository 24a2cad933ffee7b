//! LMDB environment setup.

use std::path::Path;
use std::sync::Arc;

use heed::{Env, EnvOpenOptions};

use crate::LmdbError;

/// Default map size: parameter records are tiny, 64 MiB leaves ample headroom.
pub const DEFAULT_MAP_SIZE: usize = 64 * 1024 * 1024;

/// Wraps the LMDB environment.
pub struct LmdbEnvironment {
    pub(crate) env: Arc<Env>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given directory.
    pub fn open(path: &Path, max_dbs: u32, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        // SAFETY: the environment is opened once per directory by this process
        // and never mapped twice; heed requires the caller to uphold that.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(max_dbs)
                .open(path)?
        };
        tracing::debug!(path = %path.display(), map_size, "opened LMDB environment");
        Ok(Self { env: Arc::new(env) })
    }
}
