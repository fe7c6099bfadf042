//! Per-call completion hooks
//!
//! Every navigation carries its own [`NavCallbacks`]. The host consumes the
//! bundle exactly once when it answers the call, so hooks can never leak
//! from one navigation into the next.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host answer handed to the `success` and `fail` hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavResponse {
    /// Host status line, e.g. `navigateTo:ok`
    #[serde(rename = "errMsg")]
    pub err_msg: String,
}

impl NavResponse {
    /// Successful answer for the given host api
    pub fn ok(api: &str) -> Self {
        Self {
            err_msg: format!("{}:ok", api),
        }
    }

    /// Failed answer for the given host api
    pub fn fail(api: &str, reason: impl fmt::Display) -> Self {
        Self {
            err_msg: format!("{}:fail {}", api, reason),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.err_msg.ends_with(":ok")
    }
}

impl fmt::Display for NavResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.err_msg)
    }
}

pub type SuccessHook = Box<dyn FnOnce(NavResponse) + Send + 'static>;
pub type FailHook = Box<dyn FnOnce(NavResponse) + Send + 'static>;
pub type CompleteHook = Box<dyn FnOnce() + Send + 'static>;

/// Success/fail/complete hooks for a single navigation.
#[derive(Default)]
pub struct NavCallbacks {
    on_success: Option<SuccessHook>,
    on_fail: Option<FailHook>,
    on_complete: Option<CompleteHook>,
}

impl NavCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(NavResponse) + Send + 'static,
    {
        self.on_success = Some(Box::new(hook));
        self
    }

    pub fn on_fail<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(NavResponse) + Send + 'static,
    {
        self.on_fail = Some(Box::new(hook));
        self
    }

    pub fn on_complete<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Run `success` then `complete`
    pub fn succeed(self, response: NavResponse) {
        if let Some(hook) = self.on_success {
            hook(response);
        }
        if let Some(hook) = self.on_complete {
            hook();
        }
    }

    /// Run `fail` then `complete`
    pub fn fail(self, response: NavResponse) {
        if let Some(hook) = self.on_fail {
            hook(response);
        }
        if let Some(hook) = self.on_complete {
            hook();
        }
    }

    /// Route a host outcome to the matching hooks
    pub fn settle(self, outcome: Result<NavResponse, NavResponse>) {
        match outcome {
            Ok(response) => self.succeed(response),
            Err(response) => self.fail(response),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_success.is_none() && self.on_fail.is_none() && self.on_complete.is_none()
    }
}

impl fmt::Debug for NavCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavCallbacks")
            .field("on_success", &self.on_success.is_some())
            .field("on_fail", &self.on_fail.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, NavCallbacks) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let callbacks = NavCallbacks::new()
            .on_success({
                let events = Arc::clone(&events);
                move |res| events.lock().unwrap().push(format!("success {}", res))
            })
            .on_fail({
                let events = Arc::clone(&events);
                move |res| events.lock().unwrap().push(format!("fail {}", res))
            })
            .on_complete({
                let events = Arc::clone(&events);
                move || events.lock().unwrap().push("complete".to_string())
            });
        (events, callbacks)
    }

    #[test]
    fn test_success_runs_before_complete() {
        let (events, callbacks) = recorder();
        callbacks.settle(Ok(NavResponse::ok("navigateTo")));

        assert_eq!(
            *events.lock().unwrap(),
            vec!["success navigateTo:ok", "complete"]
        );
    }

    #[test]
    fn test_fail_runs_before_complete() {
        let (events, callbacks) = recorder();
        callbacks.settle(Err(NavResponse::fail(
            "navigateBack",
            "cannot navigate back at first page.",
        )));

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "fail navigateBack:fail cannot navigate back at first page.",
                "complete"
            ]
        );
    }

    #[test]
    fn test_missing_hooks_are_skipped() {
        let callbacks = NavCallbacks::new();
        assert!(callbacks.is_empty());
        callbacks.succeed(NavResponse::ok("reLaunch"));

        let response = NavResponse::fail("switchTab", "can not switch to no-tabBar page");
        assert!(!response.is_ok());
        NavCallbacks::new().fail(response);
    }
}
