//! Router configuration for pagestack core
//!
//! Only exports data types and in-memory parsing. File discovery and loading
//! happen in the CLI layer.

pub mod types;

pub use types::{RouterConfig, DEFAULT_PARAM_KEY_SUFFIX};
