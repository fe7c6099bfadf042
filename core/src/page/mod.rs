//! Page declarations and the normalized page registry
//!
//! Pages are declared once by the embedding application as `(name, url)` pairs
//! and normalized here so that every url is an absolute path.

pub mod descriptor;
pub mod registry;

// Re-export commonly used types
pub use descriptor::{PageDescriptor, PageName, RawPage};
pub use registry::{normalize_url, PageRegistry};
