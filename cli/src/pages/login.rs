//! Login page
//!
//! Reads the phone number handed over by the opening page and can send a
//! result back to the previous page.

use pagestack_core::{KeyValueStore, NavigationHost, Router, RouterResult};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Params the login page accepts
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginParams {
    #[serde(default)]
    phone_number: String,
}

/// Login page data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginPage {
    pub phone_number: String,
    pub verify_code: String,
}

impl LoginPage {
    /// Page name in the manifest
    pub const NAME: &'static str = "login";

    /// Load the page from the params of the navigation that opened it
    pub fn on_load<H, S>(router: &Router<H, S>) -> RouterResult<Self>
    where
        H: NavigationHost,
        S: KeyValueStore,
    {
        let params: LoginParams = router.params_as()?.unwrap_or_default();
        info!(
            current_page = ?router.current_page().map(|page| page.url.as_str()),
            "login onLoad"
        );

        Ok(Self {
            phone_number: params.phone_number,
            verify_code: String::new(),
        })
    }

    /// Go back one page, telling it the login did not happen
    pub fn handle_back_params<H, S>(&self, router: &mut Router<H, S>) -> RouterResult<()>
    where
        H: NavigationHost,
        S: KeyValueStore,
    {
        router.back(1).params(&json!({ "isLogin": false })).dispatch()?;
        Ok(())
    }

    /// Go back one page without params
    pub fn handle_back<H, S>(&self, router: &mut Router<H, S>) -> RouterResult<()>
    where
        H: NavigationHost,
        S: KeyValueStore,
    {
        router
            .back(1)
            .success(|res| info!("back success: {}", res))
            .dispatch()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::demo_config;
    use crate::session::build_router;
    use pagestack_core::MemoryStore;

    #[test]
    fn test_on_load_reads_phone_number() {
        let mut router = build_router(&demo_config(), Box::new(MemoryStore::new()));
        router
            .push(LoginPage::NAME)
            .params(&json!({ "phoneNumber": "123" }))
            .dispatch()
            .unwrap();
        router.host_mut().run_pending();

        let page = LoginPage::on_load(&router).unwrap();
        assert_eq!(page.phone_number, "123");
        assert!(page.verify_code.is_empty());
    }

    #[test]
    fn test_on_load_without_params() {
        let mut router = build_router(&demo_config(), Box::new(MemoryStore::new()));
        router.push(LoginPage::NAME).dispatch().unwrap();

        assert_eq!(LoginPage::on_load(&router).unwrap(), LoginPage::default());
    }

    #[test]
    fn test_back_with_params_is_keyed_by_login() {
        let mut router = build_router(&demo_config(), Box::new(MemoryStore::new()));
        router.push(LoginPage::NAME).dispatch().unwrap();
        router.host_mut().run_pending();

        let page = LoginPage::on_load(&router).unwrap();
        page.handle_back_params(&mut router).unwrap();
        router.host_mut().run_pending();

        assert_eq!(router.params(), Some(&json!({ "isLogin": false })));
        assert_eq!(
            router.stored_params("login-params").unwrap(),
            Some(json!({ "isLogin": false }))
        );
        assert_eq!(router.host().stack(), ["/pages/index/index"]);

        router.push(LoginPage::NAME).dispatch().unwrap();
        page.handle_back(&mut router).unwrap();
        assert_eq!(router.host_mut().run_pending(), 2);
        assert!(router.params().is_none());
    }
}
