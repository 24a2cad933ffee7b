use thiserror::Error;

use dpos_types::InvalidConfiguration;

use crate::persistence::PersistenceError;

#[derive(Debug, Error)]
pub enum DposError {
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl DposError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DposError::Persistence(e) if e.is_not_found())
    }
}
