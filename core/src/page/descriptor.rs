//! Page identifiers and descriptors

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageName(pub String);

impl PageName {
    /// Create a new page name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PageName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&PageName> for PageName {
    fn from(name: &PageName) -> Self {
        name.clone()
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for PageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A page entry exactly as the application declares it.
///
/// The url may still be relative (`pages/login/login`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    pub name: String,
    pub url: String,
}

impl RawPage {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A registered page. `url` always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    /// Unique identifier for this page
    pub name: PageName,
    /// Absolute path handed to the host
    pub url: String,
}

impl PageDescriptor {
    pub fn name(&self) -> &PageName {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}
