//! Configuration types for the page router
//!
//! The JSON shape mirrors a mini-program app manifest:
//!
//! ```json
//! {
//!   "pages": [{ "name": "login", "url": "pages/login/login" }],
//!   "tabBar": ["index"],
//!   "paramKeySuffix": "-params",
//!   "maxStackDepth": 10
//! }
//! ```

use crate::error::ConfigError;
use crate::host::simulated::DEFAULT_MAX_DEPTH;
use crate::page::RawPage;
use serde::{Deserialize, Serialize};

/// Suffix appended to a page name to build its parameter storage key
pub const DEFAULT_PARAM_KEY_SUFFIX: &str = "-params";

fn default_param_key_suffix() -> String {
    DEFAULT_PARAM_KEY_SUFFIX.to_string()
}

fn default_max_stack_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Page declarations plus router settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    /// Declared pages; `None` when the manifest has no `pages` entry
    #[serde(default)]
    pub pages: Option<Vec<RawPage>>,

    /// Names of the tab-root pages
    #[serde(default)]
    pub tab_bar: Vec<String>,

    #[serde(default = "default_param_key_suffix")]
    pub param_key_suffix: String,

    /// Page stack limit enforced by the simulated host
    #[serde(default = "default_max_stack_depth")]
    pub max_stack_depth: usize,
}

impl RouterConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            pages: None,
            tab_bar: Vec::new(),
            param_key_suffix: default_param_key_suffix(),
            max_stack_depth: default_max_stack_depth(),
        }
    }

    /// Declare a page
    pub fn add_page(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.pages
            .get_or_insert_with(Vec::new)
            .push(RawPage::new(name, url));
        self
    }

    /// Mark a declared page as a tab root
    pub fn with_tab(mut self, name: impl Into<String>) -> Self {
        self.tab_bar.push(name.into());
        self
    }

    pub fn with_param_key_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.param_key_suffix = suffix.into();
        self
    }

    pub fn with_max_stack_depth(mut self, max_stack_depth: usize) -> Self {
        self.max_stack_depth = max_stack_depth;
        self
    }

    /// Parse and validate a JSON manifest
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::InvalidFormat {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pages = self.pages.as_deref().unwrap_or_default();

        for (index, page) in pages.iter().enumerate() {
            if page.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("pages[{}].name", index),
                    value: page.name.clone(),
                });
            }
        }

        // Tab roots must be declared pages
        for name in &self.tab_bar {
            if !pages.iter().any(|page| &page.name == name) {
                return Err(ConfigError::InvalidValue {
                    field: "tabBar".to_string(),
                    value: name.clone(),
                });
            }
        }

        if self.param_key_suffix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paramKeySuffix".to_string(),
                value: String::new(),
            });
        }

        if self.max_stack_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxStackDepth".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}
