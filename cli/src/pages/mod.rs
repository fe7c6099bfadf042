//! Sample pages driven by the demo flow

pub mod index;
pub mod login;

pub use index::IndexPage;
pub use login::LoginPage;

use pagestack_core::RouterConfig;

/// Manifest of the built-in sample app
pub fn demo_config() -> RouterConfig {
    RouterConfig::new()
        .add_page(IndexPage::NAME, "pages/index/index")
        .add_page(LoginPage::NAME, "pages/login/login")
        .with_tab(IndexPage::NAME)
}
