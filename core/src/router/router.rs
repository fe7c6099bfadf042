//! Router implementation for managing navigation state
//!
//! This module provides the core router: page resolution, parameter handoff
//! through host storage and dispatch to host primitives.

use super::callbacks::NavCallbacks;
use super::intent::{NavigationIntent, BACK_HOME_DELTA};
use super::navigation::Navigation;
use crate::config::{RouterConfig, DEFAULT_PARAM_KEY_SUFFIX};
use crate::error::{RouterError, RouterResult};
use crate::host::NavigationHost;
use crate::page::{PageDescriptor, PageName, PageRegistry};
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, debug_span};
use uuid::Uuid;

/// Navigation state owned by a router
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterState {
    /// Page most recently opened by a forward navigation. `back` leaves it alone.
    pub current_page: Option<PageDescriptor>,
    /// Payload handed over by the last navigation, if it carried one
    pub params: Option<Value>,
}

/// Page router bound to a host and a key-value store.
///
/// One router is created by the application shell and passed to every page
/// that navigates or reads params.
#[derive(Debug)]
pub struct Router<H, S> {
    registry: PageRegistry,
    param_key_suffix: String,
    host: H,
    storage: S,
    state: RouterState,
}

impl<H, S> Router<H, S>
where
    H: NavigationHost,
    S: KeyValueStore,
{
    /// Create a router from configuration.
    ///
    /// Nothing is sent to the host or the store here.
    pub fn new(config: &RouterConfig, host: H, storage: S) -> Self {
        Self {
            registry: PageRegistry::normalize(config.pages.as_deref()),
            param_key_suffix: config.param_key_suffix.clone(),
            host,
            storage,
            state: RouterState::default(),
        }
    }

    /// Create a router over an already normalized registry
    pub fn with_registry(registry: PageRegistry, host: H, storage: S) -> Self {
        Self {
            registry,
            param_key_suffix: DEFAULT_PARAM_KEY_SUFFIX.to_string(),
            host,
            storage,
            state: RouterState::default(),
        }
    }

    /// Open `name` on top of the current page
    pub fn push(&mut self, name: impl Into<PageName>) -> Navigation<'_, H, S> {
        Navigation::new(self, NavigationIntent::Push(name.into()))
    }

    /// Close every page and open `name`
    pub fn re_launch(&mut self, name: impl Into<PageName>) -> Navigation<'_, H, S> {
        Navigation::new(self, NavigationIntent::ReLaunch(name.into()))
    }

    /// Replace the current page with `name`
    pub fn redirect(&mut self, name: impl Into<PageName>) -> Navigation<'_, H, S> {
        Navigation::new(self, NavigationIntent::Redirect(name.into()))
    }

    /// Switch to the tab root `name`. Tab switches carry no params.
    pub fn switch_tab(&mut self, name: impl Into<PageName>) -> Navigation<'_, H, S> {
        Navigation::new(self, NavigationIntent::SwitchTab(name.into()))
    }

    /// Pop `delta` pages; a delta of 0 pops one
    pub fn back(&mut self, delta: u64) -> Navigation<'_, H, S> {
        Navigation::new(
            self,
            NavigationIntent::Back {
                delta: delta.max(1),
            },
        )
    }

    /// Pop back to the first page of the stack
    pub fn back_home(&mut self) -> Navigation<'_, H, S> {
        self.back(BACK_HOME_DELTA)
    }

    /// Perform a navigation.
    ///
    /// The target page is resolved before anything else happens, so an
    /// unknown page leaves state, storage and host untouched. Params are
    /// written under the target page's key for forward intents and under the
    /// current page's key for `back`, then read back from the store. A `null`
    /// payload counts as no payload.
    pub fn navigate(
        &mut self,
        intent: NavigationIntent,
        params: Option<Value>,
        callbacks: NavCallbacks,
    ) -> RouterResult<&mut Self> {
        let nav_id = Uuid::new_v4();
        let _span = debug_span!("navigate", %nav_id, intent = %intent).entered();

        let (page, call) = intent.resolve(&self.registry)?;

        let params = params.filter(|payload| !payload.is_null());
        if params.is_some() && !intent.accepts_params() {
            return Err(RouterError::ParamsNotAccepted {
                intent: intent.name(),
            });
        }

        self.state.params = match params {
            Some(payload) => {
                let owner = match (&page, &self.state.current_page) {
                    (Some(target), _) => target.name.clone(),
                    (None, Some(current)) => current.name.clone(),
                    (None, None) => return Err(RouterError::NoCurrentPage),
                };
                self.hand_off(&owner, &payload)?
            }
            None => None,
        };

        if let Some(page) = page {
            self.state.current_page = Some(page);
        }

        debug!(call = %call, "Dispatching to host");
        call.invoke(&mut self.host, callbacks);
        Ok(self)
    }

    /// Persist `payload` under the owner's key and read it back
    fn hand_off(&mut self, owner: &PageName, payload: &Value) -> RouterResult<Option<Value>> {
        let key = self.param_key(owner);
        self.storage.set(&key, payload)?;
        debug!(key = %key, "Params stored");
        self.stored_params(&key)
    }

    /// Storage key holding the params handed to `page`
    pub fn param_key(&self, page: &PageName) -> String {
        format!("{}{}", page, self.param_key_suffix)
    }

    /// Read whatever was last stored under `key`
    pub fn stored_params(&self, key: &str) -> RouterResult<Option<Value>> {
        Ok(self.storage.get(key)?)
    }

    /// Params handed over by the last navigation
    pub fn params(&self) -> Option<&Value> {
        self.state.params.as_ref()
    }

    /// Params handed over by the last navigation, decoded into `T`
    pub fn params_as<T: DeserializeOwned>(&self) -> RouterResult<Option<T>> {
        self.state
            .params
            .clone()
            .map(serde_json::from_value)
            .transpose()
            .map_err(RouterError::from)
    }

    pub fn current_page(&self) -> Option<&PageDescriptor> {
        self.state.current_page.as_ref()
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
