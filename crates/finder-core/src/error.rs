//! Catalog error types.

use thiserror::Error;

/// Errors raised while obtaining a product catalog.
///
/// Payloads are plain strings so the error can be stored in view state
/// and compared in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The remote or file-backed fetch could not complete.
    #[error("Failed to fetch catalog: {0}")]
    FetchFailure(String),

    /// The fetched catalog breaks a catalog invariant.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::FetchFailure(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::FetchFailure(format!("malformed catalog data: {}", e))
    }
}

/// Errors that can occur loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the config file.
    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// Failed to write the config file.
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
