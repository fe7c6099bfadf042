//! Per-call navigation builder
//!
//! ```ignore
//! router
//!     .push("login")
//!     .params(&json!({ "phoneNumber": "123" }))
//!     .success(|res| println!("opened: {}", res))
//!     .dispatch()?;
//! ```

use super::callbacks::{NavCallbacks, NavResponse};
use super::intent::NavigationIntent;
use super::router::Router;
use crate::error::{RouterError, RouterResult};
use crate::host::NavigationHost;
use crate::storage::KeyValueStore;
use serde::Serialize;
use serde_json::Value;

/// A navigation waiting to be dispatched.
///
/// Hooks registered here belong to this call only.
#[must_use = "a navigation does nothing until it is dispatched"]
pub struct Navigation<'r, H, S> {
    router: &'r mut Router<H, S>,
    intent: NavigationIntent,
    params: Option<Value>,
    invalid_params: Option<serde_json::Error>,
    callbacks: NavCallbacks,
}

impl<'r, H, S> Navigation<'r, H, S>
where
    H: NavigationHost,
    S: KeyValueStore,
{
    pub(crate) fn new(router: &'r mut Router<H, S>, intent: NavigationIntent) -> Self {
        Self {
            router,
            intent,
            params: None,
            invalid_params: None,
            callbacks: NavCallbacks::new(),
        }
    }

    /// Attach a payload for the next page.
    ///
    /// Serialization errors are reported by [`dispatch`](Self::dispatch).
    pub fn params<P: Serialize + ?Sized>(mut self, params: &P) -> Self {
        // The last call wins, whether it serialized or not.
        match serde_json::to_value(params) {
            Ok(value) => {
                self.params = Some(value);
                self.invalid_params = None;
            }
            Err(e) => {
                self.params = None;
                self.invalid_params = Some(e);
            }
        }
        self
    }

    pub fn success<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(NavResponse) + Send + 'static,
    {
        self.callbacks = self.callbacks.on_success(hook);
        self
    }

    pub fn fail<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(NavResponse) + Send + 'static,
    {
        self.callbacks = self.callbacks.on_fail(hook);
        self
    }

    pub fn complete<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.callbacks = self.callbacks.on_complete(hook);
        self
    }

    pub fn intent(&self) -> &NavigationIntent {
        &self.intent
    }

    /// Send the navigation to the router and return the router for chaining
    pub fn dispatch(self) -> RouterResult<&'r mut Router<H, S>> {
        let Navigation {
            router,
            intent,
            params,
            invalid_params,
            callbacks,
        } = self;

        if let Some(e) = invalid_params {
            return Err(RouterError::Params(e));
        }
        router.navigate(intent, params, callbacks)
    }
}
