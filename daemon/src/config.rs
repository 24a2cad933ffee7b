//! Parameter files in TOML.
//!
//! Any subset of [`DposParams`] fields may appear; missing fields keep their
//! default values. Large amounts can be written as quoted decimal strings.

use std::path::Path;

use dpos_types::DposParams;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameter file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render parameters: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load parameters from a TOML file.
pub fn params_from_toml_file(path: &Path) -> Result<DposParams, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    params_from_toml_str(&content)
}

/// Parse parameters from a TOML string.
pub fn params_from_toml_str(s: &str) -> Result<DposParams, ConfigError> {
    Ok(toml::from_str(s)?)
}

/// Render parameters as TOML.
pub fn params_to_toml_string(params: &DposParams) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(params)?)
}
