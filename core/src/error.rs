//! Error types and handling for pagestack core

use thiserror::Error;

/// Result type alias for pagestack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for router operations
pub type RouterResult<T> = std::result::Result<T, RouterError>;

/// Main error type for pagestack core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Navigation errors raised by the router
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid configuration format: {message}")]
    InvalidFormat { message: String },

    #[error("No configuration found")]
    NoConfigFound,
}

/// Errors raised synchronously by a navigation call.
///
/// Host-side rejections never show up here; they reach the caller only through
/// the call's `fail` hook.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Page '{name}' is not registered")]
    UnknownPage { name: String },

    #[error("Cannot pass params back: no page has been navigated to yet")]
    NoCurrentPage,

    #[error("{intent} does not accept params")]
    ParamsNotAccepted { intent: &'static str },

    #[error("Invalid params payload: {0}")]
    Params(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Key-value storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage file is corrupt: {path}")]
    Corrupt { path: String },
}
