use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The key was never written. Backends must report this variant rather
    /// than folding it into [`StoreError::Backend`].
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}
