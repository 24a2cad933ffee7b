use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB error: {0}")]
    Heed(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<heed::Error> for LmdbError {
    fn from(e: heed::Error) -> Self {
        LmdbError::Heed(e.to_string())
    }
}

impl From<std::io::Error> for LmdbError {
    fn from(e: std::io::Error) -> Self {
        LmdbError::Io(e.to_string())
    }
}

impl From<LmdbError> for dpos_store::StoreError {
    fn from(e: LmdbError) -> Self {
        dpos_store::StoreError::Backend(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpos_store::StoreError;

    #[test]
    fn lmdb_failures_surface_as_backend_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StoreError = LmdbError::from(io).into();
        match err {
            StoreError::Backend(msg) => assert_eq!(msg, "IO error: read-only"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
