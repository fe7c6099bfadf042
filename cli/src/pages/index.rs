//! Home tab page

use pagestack_core::{KeyValueStore, NavigationHost, Router, RouterResult};
use serde_json::json;
use tracing::{info, warn};

/// Home page, the entry tab of the sample app
#[derive(Debug, Clone, Default)]
pub struct IndexPage;

impl IndexPage {
    pub const NAME: &'static str = "index";

    /// Open the login page with the phone number filled in
    pub fn open_login<H, S>(&self, router: &mut Router<H, S>, phone_number: &str) -> RouterResult<()>
    where
        H: NavigationHost,
        S: KeyValueStore,
    {
        router
            .push(super::LoginPage::NAME)
            .params(&json!({ "phoneNumber": phone_number }))
            .success(|res| info!("login opened: {}", res))
            .fail(|res| warn!("login not opened: {}", res))
            .dispatch()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{demo_config, LoginPage};
    use crate::session::build_router;
    use pagestack_core::MemoryStore;

    #[test]
    fn test_open_login_stores_params_for_login() {
        let mut router = build_router(&demo_config(), Box::new(MemoryStore::new()));
        IndexPage.open_login(&mut router, "13800000000").unwrap();
        router.host_mut().run_pending();

        assert_eq!(
            router.current_page().map(|page| page.url()),
            Some("/pages/login/login")
        );
        assert_eq!(
            router.stored_params("login-params").unwrap(),
            Some(json!({ "phoneNumber": "13800000000" }))
        );
        assert_eq!(
            LoginPage::on_load(&router).unwrap().phone_number,
            "13800000000"
        );
    }
}
